use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unrecognized date interval: `{0}`")]
    InvalidInterval(String),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("timestamp out of calendar range: {0}ms")]
    InvalidTimestamp(i64),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
