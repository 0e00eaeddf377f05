//! Autoplay speeds and their step delays.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Speed {
    /// 0.5x: one step every 4 seconds.
    Half,
    /// 1x: one step every 2 seconds.
    #[default]
    Normal,
    /// 2x: one step every second.
    Double,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    pub fn delay(self) -> Duration {
        match self {
            Speed::Half => Duration::from_millis(4000),
            Speed::Normal => Duration::from_millis(2000),
            Speed::Double => Duration::from_millis(1000),
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
        }
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Speed::Half => f.write_str("0.5x"),
            Speed::Normal => f.write_str("1x"),
            Speed::Double => f.write_str("2x"),
        }
    }
}

impl FromStr for Speed {
    type Err = ReplayError;

    /// Accepts `0.5`, `1`, `2`, with or without a trailing `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_suffix(['x', 'X']).unwrap_or(trimmed);
        match bare {
            "0.5" | ".5" => Ok(Speed::Half),
            "1" | "1.0" => Ok(Speed::Normal),
            "2" | "2.0" => Ok(Speed::Double),
            _ => Err(ReplayError::config(format!(
                "Unsupported autoplay speed '{s}'; expected 0.5, 1 or 2"
            ))),
        }
    }
}
