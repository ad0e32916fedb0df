/// Tuning parameters for the drift field
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (world units)
    pub const FIELD_WIDTH: f32 = 10.0;
    pub const FIELD_HEIGHT: f32 = 10.0;

    // Windbreak
    pub const BARRIER_X: f32 = 5.0;
    pub const BARRIER_HEIGHT_FRACTION: f32 = 0.6; // 6 on the 0-10 scale

    // Particles
    pub const PARTICLE_COUNT: usize = 250;
    pub const CLAMP_PARTICLE_COUNT: usize = 200;
    pub const MAX_PARTICLES: usize = 10_000;

    // Wind (world units per frame)
    pub const WIND_SPEED: f32 = 0.25;
    pub const CLAMP_WIND_SPEED: f32 = 0.15;

    // Crossing probability = wind * WIND_GAIN - height_0to10 / HEIGHT_DIVISOR
    pub const CROSSING_WIND_GAIN: f32 = 4.0;
    pub const CROSSING_HEIGHT_DIVISOR: f32 = 10.0;

    // Animation
    pub const FRAME_COUNT: u32 = 40;
    pub const MAX_FRAMES: u32 = 1_000;
    pub const FRAME_INTERVAL_MS: u32 = 120;
    pub const CLAMP_FRAME_INTERVAL_MS: u32 = 200;

    // Dashboard units: km/h per world unit per frame
    pub const KMH_PER_FIELD_UNIT: f32 = 100.0;

    pub const DEFAULT_SEED: u64 = 12345;
}
