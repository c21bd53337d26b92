use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};

/// Calendar fields a hover label is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// Zero-based month index, `0` is January.
    pub month0: u32,
    pub day: u32,
}

impl CalendarDate {
    #[must_use]
    pub fn from_timestamp_millis_utc(timestamp_millis: i64) -> Option<Self> {
        Self::from_timestamp_millis(timestamp_millis, utc_offset())
    }

    /// Decodes epoch milliseconds into calendar fields at a fixed UTC offset.
    ///
    /// Returns `None` when the instant lies outside chrono's representable range.
    #[must_use]
    pub fn from_timestamp_millis(timestamp_millis: i64, offset: FixedOffset) -> Option<Self> {
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_millis)?;
        let local = utc.with_timezone(&offset);
        Some(Self {
            year: local.year(),
            month0: local.month0(),
            day: local.day(),
        })
    }
}

#[must_use]
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}
