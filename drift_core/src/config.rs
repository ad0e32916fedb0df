use crate::{Barrier, Params};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the windbreak treats particles that reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierMode {
    /// Hard wall: every particle that reaches the line is held there
    Clamp,
    /// One crossing draw per particle, on the frame it first reaches the line
    #[default]
    Probabilistic,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("wind speed must be finite and non-negative, got {0}")]
    InvalidWindSpeed(f32),
    #[error("barrier x must lie strictly inside (0, {width}), got {x}")]
    BarrierOutsideField { x: f32, width: f32 },
    #[error("barrier height fraction must lie in [0, 1], got {0}")]
    InvalidBarrierHeight(f32),
    #[error("field dimensions must be positive, got {width} x {height}")]
    InvalidField { width: f32, height: f32 },
    #[error("frame interval must be at least 1 ms")]
    ZeroFrameInterval,
    #[error("particle count {0} exceeds the limit of {max}", max = Params::MAX_PARTICLES)]
    TooManyParticles(usize),
    #[error("frame count {0} exceeds the limit of {max}", max = Params::MAX_FRAMES)]
    TooManyFrames(u32),
}

/// Probability that a particle reaching the barrier gets through it.
///
/// `wind_speed * 4 - height_0to10 / 10`, clamped to `[0, 1]`. NaN maps to 0.
/// The barrier height is on the 0-10 scale, see [`Barrier::height_0to10`].
pub fn crossing_probability(wind_speed: f32, height_0to10: f32) -> f32 {
    let raw = wind_speed * Params::CROSSING_WIND_GAIN
        - height_0to10 / Params::CROSSING_HEIGHT_DIVISOR;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Drift run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub wind_speed: f32, // world units per frame
    pub particle_count: usize,
    pub frame_count: u32,
    pub barrier: Barrier,
    pub barrier_mode: BarrierMode,
    pub field_width: f32,
    pub field_height: f32,
    pub frame_interval_ms: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::windbreak_preset()
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windbreak with a probabilistic crossing rule
    pub fn windbreak_preset() -> Self {
        Self {
            wind_speed: Params::WIND_SPEED,
            particle_count: Params::PARTICLE_COUNT,
            frame_count: Params::FRAME_COUNT,
            barrier: Barrier::new(Params::BARRIER_X, Params::BARRIER_HEIGHT_FRACTION),
            barrier_mode: BarrierMode::Probabilistic,
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            frame_interval_ms: Params::FRAME_INTERVAL_MS,
        }
    }

    /// Barrier as an absolute wall, no particle ever crosses
    pub fn clamp_preset() -> Self {
        Self {
            wind_speed: Params::CLAMP_WIND_SPEED,
            particle_count: Params::CLAMP_PARTICLE_COUNT,
            barrier: Barrier::new(Params::BARRIER_X, 1.0),
            barrier_mode: BarrierMode::Clamp,
            frame_interval_ms: Params::CLAMP_FRAME_INTERVAL_MS,
            ..Self::windbreak_preset()
        }
    }

    /// Crossing probability for this run, always in `[0, 1]`
    pub fn crossing_probability(&self) -> f32 {
        match self.barrier_mode {
            BarrierMode::Clamp => 0.0,
            BarrierMode::Probabilistic => {
                crossing_probability(self.wind_speed, self.barrier.height_0to10())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !self.wind_speed.is_finite() || self.wind_speed < 0.0 {
            return Err(ConfigError::InvalidWindSpeed(self.wind_speed));
        }
        if !(self.barrier.x > 0.0 && self.barrier.x < self.field_width) {
            return Err(ConfigError::BarrierOutsideField {
                x: self.barrier.x,
                width: self.field_width,
            });
        }
        if !(0.0..=1.0).contains(&self.barrier.height_fraction) {
            return Err(ConfigError::InvalidBarrierHeight(
                self.barrier.height_fraction,
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        // simulate() keeps every frame, F x N particles in memory
        if self.particle_count > Params::MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles(self.particle_count));
        }
        if self.frame_count > Params::MAX_FRAMES {
            return Err(ConfigError::TooManyFrames(self.frame_count));
        }
        Ok(())
    }
}
