use chart_hover::error::ChartError;
use chart_hover::view::{GraphViewSettings, SettingsInterval, parse_request_filters};
use serde_json::{Map, Value, json};

const FIELDS: &[&str] = &["collected", "country", "_id"];

fn raw(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn full_settings_validate() {
    let settings = GraphViewSettings::validate(
        &raw(json!({
            "show_date": "yes",
            "date_field": "collected",
            "date_interval": "month",
            "show_count": true,
            "count_field": "country",
            "count_label": "Countries",
        })),
        FIELDS,
    )
    .expect("valid settings");

    assert!(settings.show_date);
    assert_eq!(settings.date_field.as_deref(), Some("collected"));
    assert_eq!(settings.date_interval, SettingsInterval::Month);
    assert!(settings.wants_count_graph());
    assert_eq!(settings.count_label.as_deref(), Some("Countries"));
}

#[test]
fn missing_booleans_mean_false_and_empty_fields_are_ignored() {
    let settings = GraphViewSettings::validate(
        &raw(json!({ "date_interval": "day", "date_field": "", "count_label": "" })),
        FIELDS,
    )
    .expect("valid settings");
    assert!(!settings.show_date);
    assert!(!settings.show_count);
    assert_eq!(settings.date_field, None);
    assert_eq!(settings.count_label, None);
    assert!(!settings.wants_date_graphs());
}

#[test]
fn interval_is_required_and_restricted() {
    let err = GraphViewSettings::validate(&raw(json!({})), FIELDS).expect_err("missing");
    assert!(matches!(err, ChartError::InvalidSetting { field: "date_interval", .. }));

    let err = GraphViewSettings::validate(&raw(json!({ "date_interval": "week" })), FIELDS)
        .expect_err("unknown interval");
    assert!(matches!(err, ChartError::InvalidSetting { field: "date_interval", .. }));

    let settings = GraphViewSettings::validate(&raw(json!({ "date_interval": "hour" })), FIELDS)
        .expect("hour is a valid bucket");
    assert_eq!(settings.date_interval.label_interval(), None);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GraphViewSettings::validate(
        &raw(json!({ "date_interval": "day", "count_field": "colour" })),
        FIELDS,
    )
    .expect_err("unknown field");
    assert!(matches!(err, ChartError::InvalidSetting { field: "count_field", .. }));
}

#[test]
fn bad_boolean_is_rejected() {
    let err = GraphViewSettings::validate(
        &raw(json!({ "date_interval": "day", "show_date": "maybe" })),
        FIELDS,
    )
    .expect_err("bad boolean");
    assert!(matches!(err, ChartError::InvalidSetting { field: "show_date", .. }));
}

#[test]
fn request_filters_group_values_by_field() {
    let filters = parse_request_filters("beans:4|goats:yes|beans:some");
    assert_eq!(filters.len(), 2);
    assert_eq!(filters["beans"], vec!["4", "some"]);
    assert_eq!(filters["goats"], vec!["yes"]);
    assert_eq!(filters.keys().collect::<Vec<_>>(), vec!["beans", "goats"]);
}

#[test]
fn request_filters_split_on_first_colon_only() {
    let filters = parse_request_filters("beans:4:4:2|goats:yes");
    assert_eq!(filters["beans"], vec!["4:4:2"]);
    assert_eq!(filters["goats"], vec!["yes"]);
}

#[test]
fn empty_or_malformed_filters_are_ignored() {
    assert!(parse_request_filters("").is_empty());
    let filters = parse_request_filters("||lemons|beans:1|");
    assert_eq!(filters.len(), 1);
    assert_eq!(filters["beans"], vec!["1"]);
}

#[test]
fn request_filters_are_percent_decoded_before_splitting() {
    let filters = parse_request_filters("beans%3A4%7Cgoats%3Ayes%20please");
    assert_eq!(filters["beans"], vec!["4"]);
    assert_eq!(filters["goats"], vec!["yes please"]);
}
