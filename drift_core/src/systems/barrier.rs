use crate::{BarrierMode, Events, Particle, ParticleState, SimConfig};
use rand::Rng;

/// Resolve particles that reached the windbreak this step.
///
/// Only `InFlight` particles are considered: the crossing decision is made
/// once, on the frame a particle first touches the line. Crossed particles
/// are never pulled back and blocked ones never re-attempt.
pub fn apply_barrier<R: Rng + ?Sized>(
    particles: &mut [Particle],
    config: &SimConfig,
    events: &mut Events,
    rng: &mut R,
) {
    let barrier = config.barrier;
    let crossing_probability = config.crossing_probability();

    for particle in particles.iter_mut().filter(|p| !p.state.is_terminal()) {
        if !barrier.reached_by(particle) {
            continue;
        }

        let crosses = match config.barrier_mode {
            BarrierMode::Clamp => false,
            BarrierMode::Probabilistic => rng.gen::<f32>() < crossing_probability,
        };

        if crosses {
            particle.state = ParticleState::Crossed;
            events.newly_crossed += 1;
        } else {
            particle.pos.x = barrier.x;
            particle.state = ParticleState::Blocked;
            events.newly_blocked += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Barrier;
    use rand::rngs::mock::StepRng;

    fn at(x: f32) -> Particle {
        let mut p = Particle::new(1.0);
        p.pos.x = x;
        p
    }

    fn config(mode: BarrierMode, wind_speed: f32, height_fraction: f32) -> SimConfig {
        SimConfig {
            wind_speed,
            barrier: Barrier::new(5.0, height_fraction),
            barrier_mode: mode,
            ..SimConfig::new()
        }
    }

    #[test]
    fn test_clamp_mode_blocks_and_clamps() {
        let config = config(BarrierMode::Clamp, 0.25, 0.0);
        let mut particles = [at(5.2), at(3.0)];
        let mut events = Events::new();
        // Zero draws: would cross if the mode rolled dice
        let mut rng = StepRng::new(0, 0);

        apply_barrier(&mut particles, &config, &mut events, &mut rng);

        assert_eq!(particles[0].state, ParticleState::Blocked);
        assert_eq!(particles[0].pos.x, 5.0);
        assert_eq!(particles[1].state, ParticleState::InFlight);
        assert_eq!(particles[1].pos.x, 3.0);
        assert_eq!(events.newly_blocked, 1);
        assert_eq!(events.newly_crossed, 0);
    }

    #[test]
    fn test_low_draw_crosses_without_clamping() {
        // p = 0.25 * 4 - 0.6 = 0.4
        let config = config(BarrierMode::Probabilistic, 0.25, 0.6);
        let mut particles = [at(5.25)];
        let mut events = Events::new();
        let mut rng = StepRng::new(0, 0); // r = 0.0

        apply_barrier(&mut particles, &config, &mut events, &mut rng);

        assert_eq!(particles[0].state, ParticleState::Crossed);
        assert_eq!(particles[0].pos.x, 5.25, "Crossed particles are not clamped");
        assert_eq!(events.newly_crossed, 1);
    }

    #[test]
    fn test_high_draw_blocks() {
        let config = config(BarrierMode::Probabilistic, 0.25, 0.6);
        let mut particles = [at(5.25)];
        let mut events = Events::new();
        let mut rng = StepRng::new(u64::MAX, 0); // r just below 1.0

        apply_barrier(&mut particles, &config, &mut events, &mut rng);

        assert_eq!(particles[0].state, ParticleState::Blocked);
        assert_eq!(particles[0].pos.x, 5.0);
        assert_eq!(events.newly_blocked, 1);
    }

    #[test]
    fn test_resolved_particles_are_not_redrawn() {
        let config = config(BarrierMode::Probabilistic, 0.25, 0.6);
        let mut blocked = at(5.0);
        blocked.state = ParticleState::Blocked;
        let mut crossed = at(7.0);
        crossed.state = ParticleState::Crossed;
        let mut particles = [blocked, crossed];
        let mut events = Events::new();
        let mut rng = StepRng::new(u64::MAX, 0);

        apply_barrier(&mut particles, &config, &mut events, &mut rng);

        assert_eq!(particles[0].state, ParticleState::Blocked);
        assert_eq!(particles[1].state, ParticleState::Crossed);
        assert_eq!(particles[1].pos.x, 7.0);
        assert!(!events.any());
    }
}
