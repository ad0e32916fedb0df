use crate::Particle;

/// Carry every particle not held by the barrier downwind
pub fn advance_particles(particles: &mut [Particle], wind_speed: f32) {
    for particle in particles.iter_mut().filter(|p| p.is_moving()) {
        particle.pos.x += wind_speed;
    }
}
