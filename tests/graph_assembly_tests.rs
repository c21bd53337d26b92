use chart_hover::api::GraphView;
use chart_hover::core::{DataPoint, DateInterval, PixelPosition};
use chart_hover::interaction::RecordingTooltipSurface;
use chart_hover::view::{
    CountBucket, DateBucket, EMPTY_BUCKET_LABEL, GraphViewSettings, MAX_COUNT_BUCKETS,
    SettingsInterval, TOTAL_GRAPH_TITLE, build_count_graph, build_date_graphs, build_graphs,
};
use serde_json::json;

fn settings(interval: SettingsInterval) -> GraphViewSettings {
    GraphViewSettings {
        show_date: true,
        date_field: Some("collected".to_owned()),
        date_interval: interval,
        show_count: true,
        count_field: Some("country".to_owned()),
        count_label: None,
    }
}

fn monthly_buckets() -> Vec<DateBucket> {
    vec![
        DateBucket::parse("2023-10-01 00:00:00", 3).expect("bucket"),
        DateBucket::parse("2023-11-01", 5).expect("bucket"),
        DateBucket::parse("2023-12-01T00:00:00Z", 2).expect("bucket"),
    ]
}

#[test]
fn date_bucket_keys_convert_to_epoch_millis() {
    let bucket = DateBucket::parse("2023-11-14T22:13:20+00:00", 1).expect("bucket");
    assert_eq!(bucket.timestamp_millis(), 1_700_000_000_000);
    let shifted = DateBucket::parse("2023-11-15T00:13:20+02:00", 1).expect("bucket");
    assert_eq!(shifted.timestamp_millis(), 1_700_000_000_000);
    assert!(DateBucket::parse("last tuesday", 1).is_err());
}

#[test]
fn date_graphs_carry_running_total_and_raw_counts() {
    let graphs = build_date_graphs(&settings(SettingsInterval::Month), &monthly_buckets());
    assert_eq!(graphs.len(), 2);

    let total = &graphs[0];
    assert_eq!(total.title, TOTAL_GRAPH_TITLE);
    let totals: Vec<f64> = total.data.iter().map(|point| point.value).collect();
    assert_eq!(totals, vec![3.0, 8.0, 10.0]);
    assert_eq!(total.options["_date_interval"], json!("month"));
    assert_eq!(total.options["series"]["lines"]["show"], json!(true));
    assert_eq!(total.options["grid"]["hoverable"], json!(true));
    assert_eq!(total.options["xaxis"]["mode"], json!("time"));
    assert_eq!(total.options["yaxis"]["tickDecimals"], json!(0));

    let per = &graphs[1];
    assert_eq!(per.title, "Per month");
    let counts: Vec<f64> = per.data.iter().map(|point| point.value).collect();
    assert_eq!(counts, vec![3.0, 5.0, 2.0]);
    assert_eq!(per.options["series"]["bars"]["barWidth"], json!(0.6));
    assert!(!per.options.contains_key("_date_interval"));
    assert_eq!(per.data[1].timestamp_millis, total.data[1].timestamp_millis);
}

#[test]
fn count_graph_labels_missing_keys_and_caps_buckets() {
    let mut buckets: Vec<CountBucket> = (0..30)
        .map(|i| CountBucket::new(format!("c{i}"), 100 - i))
        .collect();
    buckets[1] = CountBucket::missing(99);

    let graph =
        build_count_graph(&settings(SettingsInterval::Day), &buckets).expect("count graph");
    assert_eq!(graph.title, "country");
    assert_eq!(graph.data.len(), MAX_COUNT_BUCKETS);
    assert_eq!(graph.data[0], DataPoint::new(0, 100.0));
    assert_eq!(graph.options["xaxis"]["ticks"][1], json!([1, EMPTY_BUCKET_LABEL]));
    assert_eq!(graph.options["xaxis"]["rotateTicks"], json!(60));
    assert_eq!(graph.options["bars"]["align"], json!("center"));
}

#[test]
fn count_label_overrides_title() {
    let mut settings = settings(SettingsInterval::Day);
    settings.count_label = Some("Countries".to_owned());
    let graph = build_count_graph(&settings, &[CountBucket::new("GB", 1)]).expect("graph");
    assert_eq!(graph.title, "Countries");
}

#[test]
fn nothing_is_built_without_switches_or_records() {
    let mut off = settings(SettingsInterval::Day);
    off.show_date = false;
    off.show_count = false;
    assert!(build_graphs(&off, &[CountBucket::new("GB", 1)], &monthly_buckets()).is_empty());
    assert!(build_graphs(&settings(SettingsInterval::Day), &[], &[]).is_empty());
}

#[test]
fn count_graph_follows_count_switch_and_field() {
    let buckets = [CountBucket::new("GB", 3)];
    let mut no_field = settings(SettingsInterval::Day);
    no_field.count_field = None;
    assert!(!no_field.wants_count_graph());
    assert!(build_count_graph(&no_field, &buckets).is_none());

    let mut switched_off = settings(SettingsInterval::Day);
    switched_off.show_count = false;
    assert!(!switched_off.wants_count_graph());
    assert!(build_count_graph(&switched_off, &buckets).is_none());

    let enabled = settings(SettingsInterval::Day);
    assert!(enabled.wants_count_graph());
    let graph = build_count_graph(&enabled, &buckets).expect("count graph");
    assert_eq!(graph.title, "country");
}

#[test]
fn assembled_graphs_come_count_first() {
    let graphs = build_graphs(
        &settings(SettingsInterval::Month),
        &[CountBucket::new("GB", 4)],
        &monthly_buckets(),
    );
    let titles: Vec<&str> = graphs.iter().map(|graph| graph.title.as_str()).collect();
    assert_eq!(titles, vec!["country", TOTAL_GRAPH_TITLE, "Per month"]);
}

#[test]
fn total_graph_feeds_a_hover_view_with_its_interval() {
    let graphs = build_date_graphs(&settings(SettingsInterval::Month), &monthly_buckets());
    let options = graphs[0].clone().into_graph_options();
    assert_eq!(options.max_interval(), Some(DateInterval::Month));

    let mut view =
        GraphView::initialize(options, RecordingTooltipSurface::default()).expect("initialize");
    let state = view.on_hover_index(Some(1), PixelPosition::new(100.0, 100.0));
    assert_eq!(state.content, "Nov-2023: 8");
}
