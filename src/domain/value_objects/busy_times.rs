use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::crowd_levels::CrowdLevel;

/// Day names indexed by day of week, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusEvent {
    pub status: CrowdLevel,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    Quiet,
    Light,
    Moderate,
    Busy,
}

impl IntensityBand {
    pub fn from_average(average_intensity: f64) -> Self {
        if average_intensity >= 2.5 {
            IntensityBand::Busy
        } else if average_intensity >= 2.0 {
            IntensityBand::Moderate
        } else if average_intensity >= 1.5 {
            IntensityBand::Light
        } else {
            IntensityBand::Quiet
        }
    }
}

/// One populated heatmap cell. Hours with no reports have no cell at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BusyTimeCell {
    pub day_of_week: u8,
    pub hour: u8,
    pub average_intensity: f64,
}

impl BusyTimeCell {
    pub fn band(&self) -> IntensityBand {
        IntensityBand::from_average(self.average_intensity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusyWindow {
    pub day_of_week: u8,
    pub start_hour: u8,
    pub average_intensity: f64,
    pub day_name: String,
    pub time_range: String,
}

impl BusyWindow {
    pub fn new(day_of_week: u8, start_hour: u8, average_intensity: f64) -> Self {
        Self {
            day_of_week,
            start_hour,
            average_intensity,
            day_name: DAY_NAMES[usize::from(day_of_week % 7)].to_string(),
            time_range: format!("{:02}:00–{:02}:00", start_hour, start_hour + 2),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.average_intensity >= 2.5 {
            "Very Busy"
        } else if self.average_intensity >= 2.0 {
            "Busy"
        } else {
            "Moderate"
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusyTimeReport {
    pub has_enough_data: bool,
    pub grid: Vec<BusyTimeCell>,
    pub top_windows: Vec<BusyWindow>,
}

impl BusyTimeReport {
    pub fn not_enough_data() -> Self {
        Self {
            has_enough_data: false,
            grid: Vec::new(),
            top_windows: Vec::new(),
        }
    }

    pub fn cell(&self, day_of_week: u8, hour: u8) -> Option<f64> {
        self.grid
            .iter()
            .find(|cell| cell.day_of_week == day_of_week && cell.hour == hour)
            .map(|cell| cell.average_intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_formats_day_and_zero_padded_range() {
        let window = BusyWindow::new(1, 8, 2.75);

        assert_eq!(window.day_name, "Monday");
        assert_eq!(window.time_range, "08:00–10:00");
        assert_eq!(window.label(), "Very Busy");
    }

    #[test]
    fn evening_window_ends_at_twenty_two() {
        let window = BusyWindow::new(6, 20, 2.0);

        assert_eq!(window.day_name, "Saturday");
        assert_eq!(window.time_range, "20:00–22:00");
        assert_eq!(window.label(), "Busy");
    }

    #[test]
    fn intensity_bands_follow_thresholds() {
        assert_eq!(IntensityBand::from_average(1.0), IntensityBand::Quiet);
        assert_eq!(IntensityBand::from_average(1.5), IntensityBand::Light);
        assert_eq!(IntensityBand::from_average(2.0), IntensityBand::Moderate);
        assert_eq!(IntensityBand::from_average(3.0), IntensityBand::Busy);

        let cell = BusyTimeCell {
            day_of_week: 3,
            hour: 18,
            average_intensity: 2.4,
        };
        assert_eq!(cell.band(), IntensityBand::Moderate);
    }
}
