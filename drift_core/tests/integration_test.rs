use drift_core::indices::risk_index;
use drift_core::*;

fn run(config: &SimConfig, seed: u64) -> Vec<Frame> {
    let mut rng = DriftRng::new(seed);
    simulate(config, &mut rng).expect("config should be valid")
}

#[test]
fn test_frame_and_particle_counts() {
    for (particles, frames) in [(0, 0), (0, 5), (7, 0), (200, 40), (250, 40)] {
        let config = SimConfig {
            particle_count: particles,
            frame_count: frames,
            ..SimConfig::new()
        };
        let out = run(&config, 1);
        assert_eq!(out.len(), frames as usize);
        for (i, frame) in out.iter().enumerate() {
            assert_eq!(frame.index, i as u32);
            assert_eq!(frame.len(), particles);
        }
    }
}

#[test]
fn test_blocked_particles_never_move() {
    let frames = run(&SimConfig::windbreak_preset(), 42);
    for pair in frames.windows(2) {
        for (before, after) in pair[0].particles.iter().zip(&pair[1].particles) {
            if before.state == ParticleState::Blocked {
                assert_eq!(after.state, ParticleState::Blocked);
                assert_eq!(after.pos, before.pos);
            }
        }
    }
}

#[test]
fn test_crossed_particles_keep_advancing() {
    let frames = run(&SimConfig::windbreak_preset(), 42);
    let mut seen_crossed = false;
    for pair in frames.windows(2) {
        for (before, after) in pair[0].particles.iter().zip(&pair[1].particles) {
            if before.state == ParticleState::Crossed {
                seen_crossed = true;
                assert_eq!(after.state, ParticleState::Crossed);
                assert!(after.pos.x >= before.pos.x);
            }
        }
    }
    assert!(seen_crossed, "p = 0.4 over 250 particles should cross some");
}

#[test]
fn test_y_positions_fixed_for_whole_run() {
    let frames = run(&SimConfig::windbreak_preset(), 3);
    let first = &frames[0];
    for frame in &frames[1..] {
        for (a, b) in first.particles.iter().zip(&frame.particles) {
            assert_eq!(a.pos.y, b.pos.y);
        }
    }
}

#[test]
fn test_calm_wind_keeps_everything_in_flight() {
    let config = SimConfig {
        wind_speed: 0.0,
        ..SimConfig::windbreak_preset()
    };
    for frame in run(&config, 9) {
        assert_eq!(frame.count(ParticleState::InFlight), frame.len());
        assert!(frame.particles.iter().all(|p| p.pos.x == 0.0));
    }
}

#[test]
fn test_certain_crossing_on_first_frame() {
    let config = SimConfig {
        wind_speed: 10.0,
        barrier: Barrier::new(5.0, 0.0),
        ..SimConfig::windbreak_preset()
    };
    assert_eq!(config.crossing_probability(), 1.0);

    let frames = run(&config, 11);
    let first = &frames[0];
    assert_eq!(first.count(ParticleState::Crossed), config.particle_count);
}

#[test]
fn test_zero_probability_never_crosses() {
    let config = SimConfig {
        wind_speed: 0.25,
        barrier: Barrier::new(5.0, 1.0),
        barrier_mode: BarrierMode::Probabilistic,
        ..SimConfig::windbreak_preset()
    };
    assert_eq!(config.crossing_probability(), 0.0);

    let frames = run(&config, 13);
    for frame in &frames {
        assert_eq!(frame.count(ParticleState::Crossed), 0);
        for p in frame.particles.iter().filter(|p| p.state == ParticleState::Blocked) {
            assert_eq!(p.pos.x, config.barrier.x);
        }
    }
    // 40 frames at 0.25 reach x = 5 on frame 20
    let last = frames.last().expect("40 frames");
    assert_eq!(last.count(ParticleState::Blocked), config.particle_count);
}

#[test]
fn test_clamp_preset_holds_every_particle() {
    let config = SimConfig::clamp_preset();
    let frames = run(&config, 21);
    let last = frames.last().expect("40 frames");
    // 40 * 0.15 = 6 > 5: everyone has reached the windbreak
    assert_eq!(last.count(ParticleState::Blocked), config.particle_count);
    assert!(last.particles.iter().all(|p| p.pos.x == config.barrier.x));
}

#[test]
fn test_huge_wind_probability_stays_in_unit_range() {
    let config = SimConfig {
        wind_speed: 100.0,
        barrier: Barrier::new(5.0, 0.3),
        ..SimConfig::windbreak_preset()
    };
    let p = config.crossing_probability();
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn test_same_seed_replays_identically() {
    let config = SimConfig::windbreak_preset();
    assert_eq!(run(&config, 77), run(&config, 77));
}

#[test]
fn test_manual_steps_match_simulate() {
    let config = SimConfig::windbreak_preset();
    let frames = run(&config, 5);

    let mut rng = DriftRng::new(5);
    let mut field = DriftField::spawn(&config, &mut rng);
    for frame in &frames {
        field = step(field, &config, &mut rng);
        assert_eq!(field.snapshot().as_ref(), Some(frame));
    }
}

#[test]
fn test_oversized_run_is_rejected_before_allocating() {
    let config = SimConfig {
        frame_count: 4_000_000_000,
        ..SimConfig::new()
    };
    let mut rng = DriftRng::default();
    assert_eq!(
        simulate(&config, &mut rng),
        Err(ConfigError::TooManyFrames(4_000_000_000))
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SimConfig {
        wind_speed: f32::INFINITY,
        ..SimConfig::new()
    };
    let mut rng = DriftRng::default();
    assert!(simulate(&config, &mut rng).is_err());
}

#[test]
fn test_risk_index_reference_points() {
    assert_eq!(risk_index(0.0, 20.0, 60.0), 0.0);
    assert_eq!(risk_index(20.0, 40.0, 20.0), 1.0);
}
