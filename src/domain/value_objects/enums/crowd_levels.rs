use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Crowd level reported through the portal.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CrowdLevel {
    #[default]
    Quiet,
    Moderate,
    Busy,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Quiet => "QUIET",
            CrowdLevel::Moderate => "MODERATE",
            CrowdLevel::Busy => "BUSY",
        }
    }

    /// Unrecognised values fall back to `Quiet` so they still score as the
    /// lowest intensity.
    pub fn from_str(value: &str) -> Self {
        match value {
            "QUIET" => CrowdLevel::Quiet,
            "MODERATE" => CrowdLevel::Moderate,
            "BUSY" => CrowdLevel::Busy,
            _ => CrowdLevel::Quiet,
        }
    }

    pub fn intensity(&self) -> u8 {
        match self {
            CrowdLevel::Quiet => 1,
            CrowdLevel::Moderate => 2,
            CrowdLevel::Busy => 3,
        }
    }
}

impl Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
