use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Badge color token handed verbatim to the admin and portal badges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Blue,
    Orange,
    Red,
    Gray,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Blue => "blue",
            StatusColor::Orange => "orange",
            StatusColor::Red => "red",
            StatusColor::Gray => "gray",
        }
    }
}

impl Display for StatusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
