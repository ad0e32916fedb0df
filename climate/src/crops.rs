use crate::stats::monthly_means_where;
use crate::{Observation, Variable};

/// Extensive crops grown around the station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Soybean,
    Maize,
    Wheat,
}

/// Typical sowing months and the thermal range the crop tolerates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SowingWindow {
    pub months: [u8; 3],
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
}

impl Crop {
    pub const ALL: [Crop; 3] = [Crop::Soybean, Crop::Maize, Crop::Wheat];

    pub fn sowing_window(self) -> SowingWindow {
        match self {
            Crop::Soybean => SowingWindow {
                months: [10, 11, 12],
                min_temperature_c: 15.0,
                max_temperature_c: 30.0,
            },
            Crop::Maize => SowingWindow {
                months: [9, 10, 11],
                min_temperature_c: 12.0,
                max_temperature_c: 30.0,
            },
            Crop::Wheat => SowingWindow {
                months: [6, 7, 8],
                min_temperature_c: 5.0,
                max_temperature_c: 20.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Crop::Soybean => "soybean",
            Crop::Maize => "maize",
            Crop::Wheat => "wheat",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Crop::ALL
            .into_iter()
            .find(|crop| crop.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Mean temperature of one window month and whether the crop tolerates it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMonth {
    pub month: u8,
    pub mean_temperature_c: f64,
    pub within_range: bool,
}

/// Monthly mean temperatures inside the crop's sowing window.
///
/// Months of the window with no observations are left out.
pub fn crop_window(observations: &[Observation], crop: Crop) -> Vec<WindowMonth> {
    let window = crop.sowing_window();
    monthly_means_where(observations, Variable::Temperature, |m| {
        window.months.contains(&m)
    })
    .into_iter()
    .map(|m| WindowMonth {
        month: m.month,
        mean_temperature_c: m.mean,
        within_range: (window.min_temperature_c..=window.max_temperature_c).contains(&m.mean),
    })
    .collect()
}
