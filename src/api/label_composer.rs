use chrono::FixedOffset;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{CalendarDate, DateInterval, utc_offset};
use crate::error::{ChartError, ChartResult};
use crate::locale::{LocaleTable, MonthNames};

pub const LABEL_DELIMITER: &str = "-";

type FieldRenderer = fn(&CalendarDate, &MonthNames) -> String;

/// Label fields in accumulation order, each tagged with its granularity.
const LABEL_FIELDS: [(DateInterval, FieldRenderer); 3] = [
    (DateInterval::Year, render_year),
    (DateInterval::Month, render_short_month),
    (DateInterval::Day, render_day),
];

fn render_year(date: &CalendarDate, _: &MonthNames) -> String {
    date.year.to_string()
}

fn render_short_month(date: &CalendarDate, names: &MonthNames) -> String {
    names.short(date.month0 as usize).to_owned()
}

fn render_day(date: &CalendarDate, _: &MonthNames) -> String {
    date.day.to_string()
}

/// Builds a label from already decoded calendar fields.
///
/// Fields accumulate year, month, day and stop right after the field tagged
/// `max_interval`. `None` never matches, so every field is rendered. The
/// accumulated fields are reversed (finest first) and joined with `-`.
#[must_use]
pub fn compose_calendar_label(
    date: &CalendarDate,
    max_interval: Option<DateInterval>,
    names: &MonthNames,
) -> String {
    let mut fields: SmallVec<[String; 3]> = SmallVec::new();
    for (tag, render) in LABEL_FIELDS {
        fields.push(render(date, names));
        if Some(tag) == max_interval {
            break;
        }
    }
    fields.reverse();
    fields.join(LABEL_DELIMITER)
}

/// Composes hover labels against a locale table at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct LabelComposer<'a> {
    locales: &'a LocaleTable,
    offset: FixedOffset,
}

impl Default for LabelComposer<'static> {
    fn default() -> Self {
        Self::new(LocaleTable::builtin())
    }
}

impl<'a> LabelComposer<'a> {
    #[must_use]
    pub fn new(locales: &'a LocaleTable) -> Self {
        Self {
            locales,
            offset: utc_offset(),
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn locales(&self) -> &'a LocaleTable {
        self.locales
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn try_compose(
        &self,
        timestamp_millis: i64,
        max_interval: Option<DateInterval>,
        language: Option<&str>,
    ) -> ChartResult<String> {
        let date = CalendarDate::from_timestamp_millis(timestamp_millis, self.offset)
            .ok_or(ChartError::InvalidTimestamp(timestamp_millis))?;
        Ok(compose_calendar_label(
            &date,
            max_interval,
            self.locales.lookup(language),
        ))
    }

    /// Infallible form of [`Self::try_compose`].
    ///
    /// An instant outside the calendar range yields an empty label.
    #[must_use]
    pub fn compose(
        &self,
        timestamp_millis: i64,
        max_interval: Option<DateInterval>,
        language: Option<&str>,
    ) -> String {
        match self.try_compose(timestamp_millis, max_interval, language) {
            Ok(label) => label,
            Err(err) => {
                warn!(timestamp_millis, error = %err, "cannot decode hover timestamp");
                String::new()
            }
        }
    }
}

/// Composes a label in UTC with the built-in locale table.
#[must_use]
pub fn compose(
    timestamp_millis: i64,
    max_interval: Option<DateInterval>,
    language: Option<&str>,
) -> String {
    LabelComposer::default().compose(timestamp_millis, max_interval, language)
}

/// Like [`compose`], taking the interval by name.
///
/// Names other than `year`, `month` or `day` render every field.
#[must_use]
pub fn compose_with_interval_name(
    timestamp_millis: i64,
    interval_name: &str,
    language: Option<&str>,
) -> String {
    compose(
        timestamp_millis,
        DateInterval::parse_lenient(interval_name),
        language,
    )
}
