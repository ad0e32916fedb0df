use crate::Observation;
use std::collections::BTreeMap;

/// Measured column to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Temperature,
    Humidity,
}

impl Variable {
    pub fn of(self, observation: &Observation) -> f64 {
        match self {
            Variable::Temperature => observation.temperature_c,
            Variable::Humidity => observation.humidity_pct,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variable::Temperature => "temperature (°C)",
            Variable::Humidity => "relative humidity (%)",
        }
    }
}

/// Headline figures for the whole dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateSummary {
    pub records: usize,
    pub mean_temperature_c: Option<f64>,
    pub mean_humidity_pct: Option<f64>,
}

impl ClimateSummary {
    pub fn from_observations(observations: &[Observation]) -> Self {
        Self {
            records: observations.len(),
            mean_temperature_c: mean(observations.iter().map(|o| o.temperature_c)),
            mean_humidity_pct: mean(observations.iter().map(|o| o.humidity_pct)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyMean {
    pub month: u8,
    pub mean: f64,
}

/// Mean of `variable` for every month present, months ascending
pub fn monthly_means(observations: &[Observation], variable: Variable) -> Vec<MonthlyMean> {
    monthly_means_where(observations, variable, |_| true)
}

pub(crate) fn monthly_means_where(
    observations: &[Observation],
    variable: Variable,
    keep_month: impl Fn(u8) -> bool,
) -> Vec<MonthlyMean> {
    let mut buckets: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for observation in observations.iter().filter(|o| keep_month(o.month)) {
        let bucket = buckets.entry(observation.month).or_default();
        bucket.0 += variable.of(observation);
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(month, (sum, count))| MonthlyMean {
            month,
            mean: sum / count as f64,
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
