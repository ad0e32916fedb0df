use crate::{Events, Frame, Particle, SimConfig};
use rand::Rng;

/// State of a drift run between two steps.
///
/// Owned by the stepper: [`crate::step`] consumes a field and returns the
/// next one, so a run is a plain fold over frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftField {
    pub particles: Vec<Particle>,
    pub frame: u32,     // steps applied so far
    pub events: Events, // transitions from the most recent step
}

impl DriftField {
    /// Place `particle_count` particles at x = 0 with y uniform over the field height
    pub fn spawn<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        let height = config.field_height;
        let particles = (0..config.particle_count)
            .map(|_| Particle::new(rng.gen_range(0.0..height)))
            .collect();

        Self {
            particles,
            frame: 0,
            events: Events::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Copy the current positions into an immutable frame.
    ///
    /// Frames are numbered from the first step, so a freshly spawned field
    /// has nothing to snapshot yet.
    pub fn snapshot(&self) -> Option<Frame> {
        let index = self.frame.checked_sub(1)?;
        Some(Frame {
            index,
            particles: self.particles.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DriftRng, ParticleState};

    #[test]
    fn test_spawn_places_particles_on_left_edge() {
        let config = SimConfig::new();
        let mut rng = DriftRng::new(1);
        let field = DriftField::spawn(&config, &mut rng);

        assert_eq!(field.len(), config.particle_count);
        assert_eq!(field.frame, 0);
        for p in &field.particles {
            assert_eq!(p.pos.x, 0.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < config.field_height);
            assert_eq!(p.state, ParticleState::InFlight);
        }
    }

    #[test]
    fn test_snapshot_numbers_frames_from_first_step() {
        let config = SimConfig::new();
        let mut rng = DriftRng::new(2);
        let field = DriftField::spawn(&config, &mut rng);
        assert_eq!(field.snapshot(), None);

        let field = crate::step(field, &config, &mut rng);
        assert_eq!(field.snapshot().map(|f| f.index), Some(0));

        let field = crate::step(field, &config, &mut rng);
        let frame = field.snapshot().expect("stepped twice");
        assert_eq!(frame.index, 1);
        assert_eq!(frame.particles, field.particles);
    }

    #[test]
    fn test_spawn_zero_particles() {
        let config = SimConfig {
            particle_count: 0,
            ..SimConfig::new()
        };
        let field = DriftField::spawn(&config, &mut DriftRng::new(1));
        assert!(field.is_empty());
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let config = SimConfig::new();
        let a = DriftField::spawn(&config, &mut DriftRng::new(99));
        let b = DriftField::spawn(&config, &mut DriftRng::new(99));
        let c = DriftField::spawn(&config, &mut DriftRng::new(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_spawn_spreads_over_height() {
        let config = SimConfig::new();
        let field = DriftField::spawn(&config, &mut DriftRng::new(5));
        let lower = field.particles.iter().filter(|p| p.pos.y < 5.0).count();
        // 250 uniform draws, both halves should be well populated
        assert!(lower > 75 && lower < 175, "lower half count {lower}");
    }
}
