use chart_hover::api::{LabelComposer, compose, compose_with_interval_name};
use chart_hover::core::DateInterval;
use chart_hover::error::ChartError;
use chart_hover::locale::LocaleTable;
use chrono::FixedOffset;

const NOV_14_2023: i64 = 1_700_000_000_000;

#[test]
fn year_interval_renders_only_the_year() {
    assert_eq!(compose(NOV_14_2023, Some(DateInterval::Year), None), "2023");
    assert_eq!(
        compose(NOV_14_2023, Some(DateInterval::Year), Some("de")),
        "2023"
    );
}

#[test]
fn month_interval_renders_short_month_then_year() {
    assert_eq!(
        compose(NOV_14_2023, Some(DateInterval::Month), Some("en")),
        "Nov-2023"
    );
    assert_eq!(
        compose(NOV_14_2023, Some(DateInterval::Month), Some("es")),
        "nov-2023"
    );
}

#[test]
fn day_interval_renders_day_month_year() {
    assert_eq!(
        compose(NOV_14_2023, Some(DateInterval::Day), Some("en")),
        "14-Nov-2023"
    );
    assert_eq!(
        compose(951_782_400_000, Some(DateInterval::Day), None),
        "29-Feb-2000"
    );
}

#[test]
fn unrecognized_interval_name_renders_every_field() {
    assert_eq!(
        compose_with_interval_name(NOV_14_2023, "hour", Some("en")),
        "14-Nov-2023"
    );
    assert_eq!(
        compose_with_interval_name(NOV_14_2023, "", Some("en")),
        "14-Nov-2023"
    );
    assert_eq!(compose(NOV_14_2023, None, Some("en")), "14-Nov-2023");
}

#[test]
fn unknown_language_uses_english_month_names() {
    assert_eq!(
        compose(NOV_14_2023, Some(DateInterval::Month), Some("xx")),
        "Nov-2023"
    );
}

#[test]
fn instants_before_the_epoch_decode_to_the_previous_day() {
    assert_eq!(compose(-1, Some(DateInterval::Day), None), "31-Dec-1969");
}

#[test]
fn year_boundary_is_respected_to_the_millisecond() {
    assert_eq!(
        compose(1_704_067_199_999, Some(DateInterval::Day), None),
        "31-Dec-2023"
    );
    assert_eq!(
        compose(1_704_067_200_000, Some(DateInterval::Day), None),
        "1-Jan-2024"
    );
}

#[test]
fn fixed_offset_shifts_the_decoded_calendar_day() {
    let east = FixedOffset::east_opt(2 * 3600).expect("offset");
    let composer = LabelComposer::new(LocaleTable::builtin()).with_offset(east);
    assert_eq!(
        composer.compose(NOV_14_2023, Some(DateInterval::Day), None),
        "15-Nov-2023"
    );
}

#[test]
fn unrepresentable_timestamp_is_an_error_or_empty_label() {
    let composer = LabelComposer::default();
    let err = composer
        .try_compose(i64::MAX, Some(DateInterval::Day), None)
        .expect_err("out of range");
    assert!(matches!(err, ChartError::InvalidTimestamp(ts) if ts == i64::MAX));
    assert_eq!(composer.compose(i64::MAX, Some(DateInterval::Day), None), "");
}
