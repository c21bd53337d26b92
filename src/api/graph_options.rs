use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{DataPoint, DateInterval};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverConfig;

pub const DATE_INTERVAL_KEY: &str = "_date_interval";
pub const GRAPH_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Chart-engine options, kept verbatim and in insertion order.
pub type EngineOptions = Map<String, Value>;

/// Options a page hands to one graph module instance.
///
/// `_date_interval` may sit at top level or inside `config`; the top-level
/// value wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphOptions {
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub config: EngineOptions,
    #[serde(
        rename = "_date_interval",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: GraphOptions,
}

impl GraphOptions {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineOptions) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_date_interval(mut self, interval: impl Into<String>) -> Self {
        self.date_interval = Some(interval.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Raw interval name as configured, if any.
    #[must_use]
    pub fn date_interval_name(&self) -> Option<&str> {
        self.date_interval
            .as_deref()
            .or_else(|| self.config.get(DATE_INTERVAL_KEY).and_then(Value::as_str))
    }

    /// Parsed interval; unknown or missing names yield `None` (all fields).
    #[must_use]
    pub fn max_interval(&self) -> Option<DateInterval> {
        self.date_interval_name()
            .and_then(DateInterval::parse_lenient)
    }

    #[must_use]
    pub fn hover_config(&self) -> HoverConfig {
        let config = HoverConfig::default();
        let config = match self.date_interval_name() {
            Some(name) => config.with_interval_name(name),
            None => config,
        };
        match self.language.as_deref() {
            Some(language) => config.with_language(language),
            None => config,
        }
    }

    /// Parses either bare options or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse graph options json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::Serialization(format!("failed to parse graph options: {e}"))
            });
        }
        let payload: GraphOptionsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::Serialization(format!("failed to parse graph options payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported graph options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.options)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = GraphOptionsJsonContractV1 {
            schema_version: GRAPH_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize graph options contract v1: {e}"))
        })
    }
}
