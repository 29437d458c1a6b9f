//! Per-frame color cycling for the pulse demo.

use nalgebra_glm as glm;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::trace;

/// The fixed palette new target colors are drawn from.
///
/// Stored as plain float triples; [`nalgebra_glm`] vectors can't yet be
/// built in const contexts.
pub const PALETTE: [[f32; 3]; 5] = [
    [0.957, 0.263, 0.212], // red
    [1.000, 0.756, 0.027], // amber
    [0.298, 0.686, 0.314], // green
    [0.129, 0.588, 0.953], // blue
    [0.612, 0.153, 0.690], // purple
];

/// How close (Euclidean distance) the current color has to get to its target
/// before a new target is drawn.
const RETARGET_DISTANCE: f32 = 0.02;

/// A color that drifts toward a randomly chosen palette entry, retargeting
/// whenever it arrives.
///
/// The integration step is `current = lerp(current, target, dt * speed)`,
/// applied once per frame. That is *not* a frame-rate-independent
/// exponential decay, and deliberately so: the demo's visual feel depends on
/// this exact formula, so it is kept rather than corrected to a compounding
/// model.
#[derive(Debug)]
pub struct ColorCycle {
    current: glm::Vec3,
    target: glm::Vec3,
    speed: f32,
    rng: SmallRng,
}

impl ColorCycle {
    /// Start at the first palette entry, drifting toward a random one.
    pub fn new(speed: f32) -> Self {
        Self::with_rng(speed, SmallRng::from_entropy())
    }

    /// Like [`ColorCycle::new`] but with a fixed seed, so the color sequence
    /// is reproducible.
    pub fn from_seed(speed: f32, seed: u64) -> Self {
        Self::with_rng(speed, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(speed: f32, mut rng: SmallRng) -> Self {
        let current = glm::make_vec3(&PALETTE[0]);
        let target = glm::make_vec3(&PALETTE[rng.gen_range(0..PALETTE.len())]);
        Self {
            current,
            target,
            speed,
            rng,
        }
    }

    /// Advance one frame. Returns the color to push to the shader.
    pub fn step(&mut self, dt: f32) -> [f32; 3] {
        self.current = glm::lerp(&self.current, &self.target, dt * self.speed);

        if glm::distance(&self.current, &self.target) < RETARGET_DISTANCE {
            self.target = glm::make_vec3(&PALETTE[self.rng.gen_range(0..PALETTE.len())]);
            trace!(color = ?self.target.as_slice(), "Retargeting color cycle");
        }

        [self.current.x, self.current.y, self.current.z]
    }

    pub fn current(&self) -> [f32; 3] {
        [self.current.x, self.current.y, self.current.z]
    }
}
