use crate::raster::{rgb, Color};
use drift_core::{BarrierMode, ParticleState, SimConfig};
use glam::Vec2;

/// What a sensitive-zone marker stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Tree,
    Dwelling,
    Livestock,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub pos: Vec2, // world units
}

impl Marker {
    pub fn new(kind: MarkerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
        }
    }
}

/// Static overlay and styling shared by every frame of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas: (u32, u32),
    pub field: (f32, f32),
    pub background: Color,
    pub barrier_x: f32,
    pub barrier_color: Color,
    pub barrier_thickness: f32, // pixels
    pub particle_radius: f32,   // pixels
    pub held_color: Color,      // in flight or blocked
    pub crossed_color: Color,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Plain windbreak: one particle colour, no zone markers
    pub fn clamp(config: &SimConfig) -> Self {
        Self {
            canvas: (480, 320),
            field: (config.field_width, config.field_height),
            background: rgb(255, 255, 255),
            barrier_x: config.barrier.x,
            barrier_color: rgb(0, 128, 0),
            barrier_thickness: 3.0,
            particle_radius: 2.0,
            held_color: rgb(31, 119, 180),
            crossed_color: rgb(31, 119, 180),
            markers: Vec::new(),
        }
    }

    /// Windbreak with crossing: crossed particles turn red, sensitive zones
    /// sit downwind of the barrier
    pub fn windbreak(config: &SimConfig) -> Self {
        let x = config.barrier.x;
        let top = config.field_height * 0.95;
        let zone_x = config.field_width * 0.82;
        Self {
            canvas: (560, 320),
            field: (config.field_width, config.field_height),
            background: rgb(255, 255, 255),
            barrier_x: x,
            barrier_color: rgb(0, 100, 0),
            barrier_thickness: 4.0,
            particle_radius: 2.0,
            held_color: rgb(0, 128, 0),
            crossed_color: rgb(220, 20, 20),
            markers: vec![
                Marker::new(MarkerKind::Tree, x - 0.4, top),
                Marker::new(MarkerKind::Dwelling, zone_x, config.field_height * 0.7),
                Marker::new(MarkerKind::Livestock, zone_x, config.field_height * 0.5),
                Marker::new(MarkerKind::Water, zone_x, config.field_height * 0.3),
            ],
        }
    }

    pub fn for_config(config: &SimConfig) -> Self {
        match config.barrier_mode {
            BarrierMode::Clamp => Self::clamp(config),
            BarrierMode::Probabilistic => Self::windbreak(config),
        }
    }

    pub fn particle_color(&self, state: ParticleState) -> Color {
        match state {
            ParticleState::InFlight | ParticleState::Blocked => self.held_color,
            ParticleState::Crossed => self.crossed_color,
        }
    }
}
