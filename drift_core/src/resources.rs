use crate::{Particle, ParticleState, Params};
use rand::{RngCore, SeedableRng};

/// Seeded random source for crossing draws and particle placement
pub struct DriftRng(pub rand::rngs::StdRng);

impl DriftRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for DriftRng {
    fn default() -> Self {
        Self::new(Params::DEFAULT_SEED)
    }
}

impl RngCore for DriftRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Transitions that happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub newly_blocked: usize,
    pub newly_crossed: usize,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.newly_blocked = 0;
        self.newly_crossed = 0;
    }

    pub fn any(&self) -> bool {
        self.newly_blocked > 0 || self.newly_crossed > 0
    }
}

/// Immutable snapshot of every particle after one step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u32, // 0-based
    pub particles: Vec<Particle>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count(&self, state: ParticleState) -> usize {
        self.particles.iter().filter(|p| p.state == state).count()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            in_flight: self.count(ParticleState::InFlight),
            blocked: self.count(ParticleState::Blocked),
            crossed: self.count(ParticleState::Crossed),
        }
    }
}

/// Per-state particle counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub in_flight: usize,
    pub blocked: usize,
    pub crossed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.in_flight + self.blocked + self.crossed
    }

    /// Share of the particles that reached the barrier and got through
    pub fn crossed_fraction(&self) -> f32 {
        let reached = self.blocked + self.crossed;
        if reached == 0 {
            0.0
        } else {
            self.crossed as f32 / reached as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_same_seed_same_sequence() {
        let mut a = DriftRng::new(7);
        let mut b = DriftRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen::<f32>(), b.gen::<f32>());
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.newly_blocked = 3;
        events.newly_crossed = 2;
        assert!(events.any());

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any());
    }

    #[test]
    fn test_frame_summary_counts_states() {
        let mut particles = vec![Particle::new(1.0); 5];
        particles[0].state = ParticleState::Blocked;
        particles[1].state = ParticleState::Crossed;
        particles[2].state = ParticleState::Crossed;
        let frame = Frame {
            index: 0,
            particles,
        };

        let summary = frame.summary();
        assert_eq!(summary.in_flight, 2);
        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.crossed, 2);
        assert_eq!(summary.total(), frame.len());
    }

    #[test]
    fn test_crossed_fraction_without_contact() {
        let summary = RunSummary {
            in_flight: 10,
            ..Default::default()
        };
        assert_eq!(summary.crossed_fraction(), 0.0);

        let summary = RunSummary {
            in_flight: 0,
            blocked: 3,
            crossed: 1,
        };
        assert!((summary.crossed_fraction() - 0.25).abs() < 1e-6);
    }
}
