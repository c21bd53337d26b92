use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One plotted sample: epoch milliseconds on x, a numeric value on y.
///
/// On the wire a point is the two-element array `[timestamp, value]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataPoint", into = "(i64, f64)")]
pub struct DataPoint {
    pub timestamp_millis: i64,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(timestamp_millis: i64, value: f64) -> Self {
        Self {
            timestamp_millis,
            value,
        }
    }
}

impl From<DataPoint> for (i64, f64) {
    fn from(point: DataPoint) -> Self {
        (point.timestamp_millis, point.value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Integer(i64),
    Float(f64),
}

#[derive(Deserialize)]
struct RawDataPoint(RawTimestamp, f64);

impl TryFrom<RawDataPoint> for DataPoint {
    type Error = ChartError;

    fn try_from(raw: RawDataPoint) -> Result<Self, Self::Error> {
        let timestamp_millis = match raw.0 {
            RawTimestamp::Integer(millis) => millis,
            // Fractional milliseconds truncate toward zero.
            RawTimestamp::Float(millis) if millis.is_finite() => millis.trunc() as i64,
            RawTimestamp::Float(millis) => {
                return Err(ChartError::InvalidData(format!(
                    "data point timestamp must be finite, got {millis}"
                )));
            }
        };
        Ok(Self::new(timestamp_millis, raw.1))
    }
}

/// Page-space pointer coordinate, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
