use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::api::{DATE_INTERVAL_KEY, EngineOptions, GraphOptions};
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::GraphViewSettings;

pub const MAX_COUNT_BUCKETS: usize = 25;
pub const EMPTY_BUCKET_LABEL: &str = "Empty";
pub const TOTAL_GRAPH_TITLE: &str = "Total records";

const BAR_WIDTH: f64 = 0.6;
const COUNT_TICK_ROTATION_DEG: u32 = 60;

/// Records sharing one value of the count field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBucket {
    /// `None` for records where the field is missing.
    pub key: Option<String>,
    pub count: u64,
}

impl CountBucket {
    #[must_use]
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: Some(key.into()),
            count,
        }
    }

    #[must_use]
    pub fn missing(count: u64) -> Self {
        Self { key: None, count }
    }
}

/// Records falling into one truncated date bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBucket {
    pub date: NaiveDateTime,
    pub count: u64,
}

impl DateBucket {
    #[must_use]
    pub fn new(date: NaiveDateTime, count: u64) -> Self {
        Self { date, count }
    }

    /// Parses a bucket key as returned by the aggregation backend.
    ///
    /// Accepts RFC 3339 (normalized to UTC), `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD`.
    pub fn parse(key: &str, count: u64) -> ChartResult<Self> {
        let key = key.trim();
        if let Ok(aware) = DateTime::parse_from_rfc3339(key) {
            return Ok(Self::new(aware.naive_utc(), count));
        }
        for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(date) = NaiveDateTime::parse_from_str(key, pattern) {
                return Ok(Self::new(date, count));
            }
        }
        if let Some(midnight) = NaiveDate::parse_from_str(key, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
        {
            return Ok(Self::new(midnight, count));
        }
        Err(ChartError::InvalidData(format!(
            "cannot parse date bucket key `{key}`"
        )))
    }

    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.date.and_utc().timestamp_millis()
    }
}

/// One graph ready to hand to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub title: String,
    /// Epoch milliseconds for date graphs, bucket index for the count graph.
    pub data: Vec<DataPoint>,
    pub options: EngineOptions,
}

impl Graph {
    #[must_use]
    pub fn into_graph_options(self) -> GraphOptions {
        GraphOptions::new(self.data).with_config(self.options)
    }
}

fn object(value: Value) -> EngineOptions {
    match value {
        Value::Object(map) => map,
        _ => EngineOptions::new(),
    }
}

fn bar_options() -> Value {
    json!({ "show": true, "barWidth": BAR_WIDTH, "align": "center" })
}

fn date_graph_defaults() -> EngineOptions {
    object(json!({
        "grid": { "hoverable": true, "clickable": true },
        "xaxis": { "mode": "time" },
        "yaxis": { "tickDecimals": 0 },
    }))
}

/// Bar graph of the most frequent values of the count field.
///
/// Keeps at most [`MAX_COUNT_BUCKETS`] buckets, in the order given.
#[must_use]
pub fn build_count_graph(settings: &GraphViewSettings, buckets: &[CountBucket]) -> Option<Graph> {
    if !settings.wants_count_graph() || buckets.is_empty() {
        return None;
    }
    let count_field = settings.count_field.as_deref()?;

    let buckets = &buckets[..buckets.len().min(MAX_COUNT_BUCKETS)];
    let mut data = Vec::with_capacity(buckets.len());
    let mut ticks = Vec::with_capacity(buckets.len());
    for (index, bucket) in buckets.iter().enumerate() {
        let label = bucket.key.as_deref().unwrap_or(EMPTY_BUCKET_LABEL);
        data.push(DataPoint::new(index as i64, bucket.count as f64));
        ticks.push(json!([index, label]));
    }

    Some(Graph {
        title: settings
            .count_label
            .clone()
            .unwrap_or_else(|| count_field.to_owned()),
        data,
        options: object(json!({
            "bars": bar_options(),
            "xaxis": { "ticks": ticks, "rotateTicks": COUNT_TICK_ROTATION_DEG },
        })),
    })
}

/// Running-total line graph and per-interval bar graph over date buckets.
#[must_use]
pub fn build_date_graphs(settings: &GraphViewSettings, buckets: &[DateBucket]) -> Vec<Graph> {
    if !settings.wants_date_graphs() || buckets.is_empty() {
        return Vec::new();
    }

    let interval = settings.date_interval.as_str();
    let mut total_data = Vec::with_capacity(buckets.len());
    let mut per_interval_data = Vec::with_capacity(buckets.len());
    let mut total = 0_u64;
    for bucket in buckets {
        let timestamp_millis = bucket.timestamp_millis();
        total += bucket.count;
        total_data.push(DataPoint::new(timestamp_millis, total as f64));
        per_interval_data.push(DataPoint::new(timestamp_millis, bucket.count as f64));
    }

    let mut total_options = object(json!({
        "series": { "lines": { "show": true }, "points": { "show": true } },
    }));
    total_options.insert(DATE_INTERVAL_KEY.to_owned(), json!(interval));
    total_options.extend(date_graph_defaults());

    let mut per_interval_options = object(json!({
        "series": { "bars": bar_options() },
    }));
    per_interval_options.extend(date_graph_defaults());

    vec![
        Graph {
            title: TOTAL_GRAPH_TITLE.to_owned(),
            data: total_data,
            options: total_options,
        },
        Graph {
            title: format!("Per {interval}"),
            data: per_interval_data,
            options: per_interval_options,
        },
    ]
}

/// Assembles every graph the settings ask for: count graph first, then date graphs.
#[must_use]
pub fn build_graphs(
    settings: &GraphViewSettings,
    count_buckets: &[CountBucket],
    date_buckets: &[DateBucket],
) -> Vec<Graph> {
    let mut graphs = Vec::new();
    if let Some(graph) = build_count_graph(settings, count_buckets) {
        graphs.push(graph);
    }
    graphs.extend(build_date_graphs(settings, date_buckets));
    debug!(
        graphs = graphs.len(),
        count_buckets = count_buckets.len(),
        date_buckets = date_buckets.len(),
        "assembled graph view"
    );
    graphs
}
