use crate::args::Args;
use anyhow::{anyhow, Context, Result};
use climate::{crop_window, load_observations, monthly_means, ClimateSummary, Crop, Variable};
use drift_core::indices::DashboardInputs;
use drift_core::{simulate, BarrierMode, DriftRng, Params, SimConfig};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const CLAMP_OUTPUT: &str = "assets/deriva_viento.gif";
pub const WINDBREAK_OUTPUT: &str = "assets/deriva_viento_cortina.gif";
pub const DEFAULT_DATASET: &str = "data/processed/clima_simbolar_2023_clean.csv";

/// Build the run configuration: preset, then JSON file, then individual flags.
///
/// Each layer only overrides the keys it names.
pub fn animation_config(args: &Args) -> Result<SimConfig> {
    let mut config = match args.raw("--variant") {
        None | Some("windbreak") => SimConfig::windbreak_preset(),
        Some("clamp") => SimConfig::clamp_preset(),
        Some(other) => return Err(anyhow!("unknown variant `{other}`, expected clamp or windbreak")),
    };

    if let Some(path) = args.path("--config") {
        config = load_config(&path, &config)?;
    }
    if let Some(wind_kmh) = args.get::<f32>("--wind")? {
        config.wind_speed = wind_kmh / Params::KMH_PER_FIELD_UNIT;
    }
    if let Some(height_pct) = args.get::<f32>("--barrier-height")? {
        config.barrier.height_fraction = height_pct / 100.0;
    }
    if let Some(particles) = args.get::<usize>("--particles")? {
        config.particle_count = particles;
    }
    if let Some(frames) = args.get::<u32>("--frames")? {
        config.frame_count = frames;
    }

    config.validate()?;
    Ok(config)
}

/// Overlay a JSON config file onto `base`
fn load_config(path: &Path, base: &SimConfig) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let overlay: Value = serde_json::from_str(&text)
        .with_context(|| format!("malformed config {}", path.display()))?;
    if !overlay.is_object() {
        return Err(anyhow!("config {} must be a JSON object", path.display()));
    }

    let mut merged = serde_json::to_value(base)?;
    merge(&mut merged, overlay);
    let config = serde_json::from_value(merged)
        .with_context(|| format!("malformed config {}", path.display()))?;
    log::debug!("loaded run configuration from {}", path.display());
    Ok(config)
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

pub fn animate(args: &Args) -> Result<()> {
    let config = animation_config(args)?;
    let seed = args.get::<u64>("--seed")?.unwrap_or(Params::DEFAULT_SEED);
    let out = args.path("--out").unwrap_or_else(|| {
        PathBuf::from(match config.barrier_mode {
            BarrierMode::Clamp => CLAMP_OUTPUT,
            BarrierMode::Probabilistic => WINDBREAK_OUTPUT,
        })
    });

    log::info!(
        "simulating {} particles over {} frames (wind {:.3}/frame, crossing probability {:.2}, seed {})",
        config.particle_count,
        config.frame_count,
        config.wind_speed,
        config.crossing_probability(),
        seed
    );

    let mut rng = DriftRng::new(seed);
    let frames = simulate(&config, &mut rng)?;
    drift_render::render_animation(&config, &frames, &out)
        .with_context(|| format!("cannot produce animation {}", out.display()))?;

    if let Some(last) = frames.last() {
        let summary = last.summary();
        println!(
            "{}: {} in flight, {} blocked, {} crossed ({:.0}% of arrivals crossed)",
            out.display(),
            summary.in_flight,
            summary.blocked,
            summary.crossed,
            summary.crossed_fraction() * 100.0
        );
    }
    Ok(())
}

pub fn risk(args: &Args) -> Result<()> {
    let defaults = DashboardInputs::default();
    let inputs = DashboardInputs {
        wind_kmh: args.get("--wind")?.unwrap_or(defaults.wind_kmh),
        barrier_height_pct: args
            .get("--barrier-height")?
            .unwrap_or(defaults.barrier_height_pct),
        temperature_c: args.get("--temp")?.unwrap_or(defaults.temperature_c),
        humidity_pct: args.get("--humidity")?.unwrap_or(defaults.humidity_pct),
    };

    let assessment = inputs.assess()?;
    println!("drift risk index:       {:.2} ({})", assessment.risk, assessment.level.advice());
    println!("windbreak crossing:     {:.2}", assessment.crossing);
    println!("temperature efficiency: {:.2}", assessment.temperature_efficiency);
    println!("humidity efficiency:    {:.2}", assessment.humidity_efficiency);
    Ok(())
}

pub fn climate(args: &Args) -> Result<()> {
    let path = args
        .path("--data")
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
    let crops = match args.raw("--crop") {
        Some(name) => vec![Crop::parse(name).ok_or_else(|| anyhow!("unknown crop `{name}`"))?],
        None => Crop::ALL.to_vec(),
    };

    let observations = load_observations(&path)?;
    let summary = ClimateSummary::from_observations(&observations);

    println!("{} records", summary.records);
    if let (Some(t), Some(h)) = (summary.mean_temperature_c, summary.mean_humidity_pct) {
        println!("mean temperature {t:.1} °C, mean humidity {h:.1} %");
    }

    for variable in [Variable::Temperature, Variable::Humidity] {
        println!("\nmonthly mean {}", variable.label());
        for m in monthly_means(&observations, variable) {
            println!("  {:>2}  {:.1}", m.month, m.mean);
        }
    }

    for crop in crops {
        let window = crop.sowing_window();
        println!(
            "\n{} sowing window, months {:?}, {}-{} °C",
            crop.name(),
            window.months,
            window.min_temperature_c,
            window.max_temperature_c
        );
        for m in crop_window(&observations, crop) {
            let verdict = if m.within_range { "ok" } else { "out of range" };
            println!("  {:>2}  {:.1} °C  {}", m.month, m.mean_temperature_c, verdict);
        }
    }
    Ok(())
}
