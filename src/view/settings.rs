use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::DateInterval;
use crate::error::{ChartError, ChartResult};

/// Bucket widths a graph view may aggregate dates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsInterval {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl SettingsInterval {
    pub const ALL: [Self; 5] = [Self::Minute, Self::Hour, Self::Day, Self::Month, Self::Year];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Interval the hover label truncates at.
    ///
    /// Sub-day buckets have no label field of their own and render all fields.
    #[must_use]
    pub fn label_interval(self) -> Option<DateInterval> {
        DateInterval::parse_lenient(self.as_str())
    }
}

impl fmt::Display for SettingsInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsInterval {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| ChartError::InvalidSetting {
                field: "date_interval",
                reason: format!("\"{s}\" is not a valid parameter"),
            })
    }
}

/// Validated settings of one graph resource view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphViewSettings {
    pub show_date: bool,
    pub date_field: Option<String>,
    pub date_interval: SettingsInterval,
    pub show_count: bool,
    pub count_field: Option<String>,
    pub count_label: Option<String>,
}

impl GraphViewSettings {
    /// Validates raw form values against the resource's datastore fields.
    pub fn validate(raw: &Map<String, Value>, known_fields: &[&str]) -> ChartResult<Self> {
        let date_interval: SettingsInterval = match raw.get("date_interval") {
            Some(Value::String(name)) if !name.is_empty() => name.parse()?,
            Some(Value::String(_)) | Some(Value::Null) | None => {
                return Err(ChartError::InvalidSetting {
                    field: "date_interval",
                    reason: "Missing value".to_owned(),
                });
            }
            Some(other) => {
                return Err(ChartError::InvalidSetting {
                    field: "date_interval",
                    reason: format!("\"{other}\" is not a valid parameter"),
                });
            }
        };

        Ok(Self {
            show_date: parse_bool_setting("show_date", raw.get("show_date"))?,
            date_field: field_setting("date_field", raw.get("date_field"), known_fields)?,
            date_interval,
            show_count: parse_bool_setting("show_count", raw.get("show_count"))?,
            count_field: field_setting("count_field", raw.get("count_field"), known_fields)?,
            count_label: optional_text(raw.get("count_label")),
        })
    }

    #[must_use]
    pub fn wants_date_graphs(&self) -> bool {
        self.show_date && self.date_field.is_some()
    }

    #[must_use]
    pub fn wants_count_graph(&self) -> bool {
        self.show_count && self.count_field.is_some()
    }
}

/// Reads a boolean form value; a missing value means `false`.
pub fn parse_bool_setting(field: &'static str, value: Option<&Value>) -> ChartResult<bool> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::String(text)) => match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "t" | "y" | "1" => Ok(true),
            "false" | "no" | "f" | "n" | "0" => Ok(false),
            _ => Err(invalid_bool(field)),
        },
        Some(_) => Err(invalid_bool(field)),
    }
}

fn invalid_bool(field: &'static str) -> ChartError {
    ChartError::InvalidSetting {
        field,
        reason: "Value must a true/false value (ie. true/yes/t/y/1 or false/no/f/n/0)".to_owned(),
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn field_setting(
    field: &'static str,
    value: Option<&Value>,
    known_fields: &[&str],
) -> ChartResult<Option<String>> {
    let Some(name) = optional_text(value) else {
        return Ok(None);
    };
    if !known_fields.contains(&name.as_str()) {
        return Err(ChartError::InvalidSetting {
            field,
            reason: format!("\"{name}\" is not a valid parameter"),
        });
    }
    Ok(Some(name))
}
