use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Coarsest calendar unit a hover label may reveal.
///
/// Variants are ordered from coarsest to finest, so `Year < Month < Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateInterval {
    Year,
    Month,
    Day,
}

impl DateInterval {
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }

    /// Parses an interval name without failing.
    ///
    /// Returns `None` for anything that is not exactly `year`, `month` or
    /// `day`; label composition treats `None` as "render every field".
    #[must_use]
    pub fn parse_lenient(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interval| interval.as_str() == name)
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateInterval {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        Self::parse_lenient(s).ok_or_else(|| ChartError::InvalidInterval(s.to_owned()))
    }
}
