pub mod components;
pub mod config;
pub mod field;
pub mod indices;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use params::*;
pub use resources::*;

use rand::Rng;
use systems::*;

/// Advance the drift field by one frame.
///
/// Takes the field by value and returns the next one; the random source is
/// only consulted for crossing draws at the barrier.
pub fn step<R: Rng + ?Sized>(mut field: DriftField, config: &SimConfig, rng: &mut R) -> DriftField {
    // Clear events at start of frame
    field.events.clear();

    // 1. Carry particles downwind
    advance_particles(&mut field.particles, config.wind_speed);

    // 2. Resolve contact with the windbreak
    apply_barrier(&mut field.particles, config, &mut field.events, rng);

    field.frame += 1;
    field
}

/// Run a full animation: spawn the field, then step exactly `frame_count`
/// times, snapshotting after every step.
pub fn simulate<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<Vec<Frame>, ConfigError> {
    config.validate()?;

    let mut field = DriftField::spawn(config, rng);
    let mut frames = Vec::with_capacity(config.frame_count as usize);

    for _ in 0..config.frame_count {
        field = step(field, config, rng);
        if field.events.any() {
            log::debug!(
                "frame {}: {} blocked, {} crossed",
                field.frame,
                field.events.newly_blocked,
                field.events.newly_crossed
            );
        }
        frames.extend(field.snapshot());
    }

    if let Some(last) = frames.last() {
        let summary = last.summary();
        log::debug!(
            "run finished after {} frames: {} in flight, {} blocked, {} crossed",
            frames.len(),
            summary.in_flight,
            summary.blocked,
            summary.crossed
        );
    }

    Ok(frames)
}
