//! Closed-form drift indices shown next to the animation.
//!
//! All inputs are in dashboard units: wind in km/h, temperature in °C,
//! relative humidity and barrier height in percent.

use crate::{crossing_probability, Params};
use thiserror::Error;

pub const WIND_RANGE: (f32, f32) = (0.0, 25.0);
pub const BARRIER_HEIGHT_RANGE: (f32, f32) = (10.0, 100.0);
pub const TEMPERATURE_RANGE: (f32, f32) = (5.0, 40.0);
pub const HUMIDITY_RANGE: (f32, f32) = (20.0, 100.0);
pub const PERCENT_STEP: f32 = 5.0;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{name} must be a number, got {value}")]
    NotANumber { name: &'static str, value: f32 },
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{name} = {value} is not a multiple of {step}")]
    OffStep {
        name: &'static str,
        value: f32,
        step: f32,
    },
}

/// Wind contribution, 1.0 at 20 km/h
pub fn wind_factor(wind_kmh: f32) -> f32 {
    wind_kmh / 20.0
}

/// Evaporation contribution, zero up to 20 °C
pub fn temperature_factor(temperature_c: f32) -> f32 {
    ((temperature_c - 20.0) / 20.0).max(0.0)
}

/// Dry-air contribution, zero from 60 % humidity upwards
pub fn humidity_factor(humidity_pct: f32) -> f32 {
    ((60.0 - humidity_pct) / 60.0).max(0.0)
}

/// Sum of the three factors, capped to `[0, 1]`
pub fn risk_index(wind_kmh: f32, temperature_c: f32, humidity_pct: f32) -> f32 {
    let sum =
        wind_factor(wind_kmh) + temperature_factor(temperature_c) + humidity_factor(humidity_pct);
    if sum.is_nan() {
        return 0.0;
    }
    sum.clamp(0.0, 1.0)
}

/// Likelihood that drift gets through a windbreak of the given relative height.
///
/// Same rule the particle stepper uses, fed with dashboard units.
pub fn crossing_index(wind_kmh: f32, barrier_height_pct: f32) -> f32 {
    crossing_probability(
        wind_kmh / Params::KMH_PER_FIELD_UNIT,
        barrier_height_pct / 10.0, // percent onto the 0-10 scale
    )
}

/// Application efficiency lost to heat: 1 at or below 20 °C, 0 at 40 °C
pub fn temperature_efficiency(temperature_c: f32) -> f32 {
    (1.0 - temperature_factor(temperature_c)).clamp(0.0, 1.0)
}

/// Application efficiency lost to dry air: 1 at or above 60 %, 0 at 0 %
pub fn humidity_efficiency(humidity_pct: f32) -> f32 {
    (1.0 - humidity_factor(humidity_pct)).clamp(0.0, 1.0)
}

/// Sample `f` over `[start, end]` every `step`, end inclusive
pub fn efficiency_curve(f: impl Fn(f32) -> f32, start: f32, end: f32, step: f32) -> Vec<(f32, f32)> {
    if step.is_nan() || step <= 0.0 || end < start {
        return Vec::new();
    }
    let samples = ((end - start) / step + 1e-4).floor() as usize + 1;
    (0..samples)
        .map(|i| {
            let x = start + i as f32 * step;
            (x, f(x))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn classify(risk: f32) -> Self {
        if risk < 0.3 {
            RiskLevel::Low
        } else if risk < 0.6 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskLevel::Low => "low risk, conditions suitable for spraying",
            RiskLevel::Moderate => "moderate risk, spray with caution",
            RiskLevel::High => "high risk, spraying not recommended",
        }
    }
}

/// The four slider inputs of the drift panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardInputs {
    pub wind_kmh: f32,
    pub barrier_height_pct: f32,
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            wind_kmh: 8.0,
            barrier_height_pct: 60.0,
            temperature_c: 25.0,
            humidity_pct: 60.0,
        }
    }
}

/// Everything the drift panel displays for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftAssessment {
    pub risk: f32,
    pub level: RiskLevel,
    pub crossing: f32,
    pub temperature_efficiency: f32,
    pub humidity_efficiency: f32,
}

impl DashboardInputs {
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("wind", self.wind_kmh, WIND_RANGE)?;
        check_range("barrier height", self.barrier_height_pct, BARRIER_HEIGHT_RANGE)?;
        check_step("barrier height", self.barrier_height_pct)?;
        check_range("temperature", self.temperature_c, TEMPERATURE_RANGE)?;
        check_range("humidity", self.humidity_pct, HUMIDITY_RANGE)?;
        check_step("humidity", self.humidity_pct)?;
        Ok(())
    }

    pub fn assess(&self) -> Result<DriftAssessment, InputError> {
        self.validate()?;
        let risk = risk_index(self.wind_kmh, self.temperature_c, self.humidity_pct);
        Ok(DriftAssessment {
            risk,
            level: RiskLevel::classify(risk),
            crossing: crossing_index(self.wind_kmh, self.barrier_height_pct),
            temperature_efficiency: temperature_efficiency(self.temperature_c),
            humidity_efficiency: humidity_efficiency(self.humidity_pct),
        })
    }
}

fn check_range(name: &'static str, value: f32, (min, max): (f32, f32)) -> Result<(), InputError> {
    if value.is_nan() {
        return Err(InputError::NotANumber { name, value });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_step(name: &'static str, value: f32) -> Result<(), InputError> {
    let steps = value / PERCENT_STEP;
    if (steps - steps.round()).abs() > 1e-4 {
        return Err(InputError::OffStep {
            name,
            value,
            step: PERCENT_STEP,
        });
    }
    Ok(())
}
