use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where a particle is in its life relative to the windbreak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleState {
    #[default]
    InFlight,
    /// Held at the barrier for the rest of the run
    Blocked,
    /// Got through the barrier and keeps drifting
    Crossed,
}

impl ParticleState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ParticleState::InFlight)
    }
}

/// A single droplet of sprayed material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2, // y is fixed for the particle's lifetime
    pub state: ParticleState,
}

impl Particle {
    pub fn new(y: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, y),
            state: ParticleState::InFlight,
        }
    }

    /// Particles that are not held by the barrier keep moving with the wind
    pub fn is_moving(&self) -> bool {
        self.state != ParticleState::Blocked
    }
}

/// Forestry strip modelled as a vertical line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub x: f32,
    pub height_fraction: f32, // 0 = no canopy, 1 = full height
}

impl Barrier {
    pub fn new(x: f32, height_fraction: f32) -> Self {
        Self { x, height_fraction }
    }

    /// Height on the 0-10 scale the crossing rule is calibrated against
    pub fn height_0to10(&self) -> f32 {
        self.height_fraction * 10.0
    }

    pub fn reached_by(&self, particle: &Particle) -> bool {
        particle.pos.x >= self.x
    }
}
