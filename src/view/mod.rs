//! Graph resource views: settings validation, request filters and the graphs
//! assembled from aggregated record buckets.

mod filters;
mod graphs;
mod settings;

pub use filters::{RequestFilters, parse_request_filters};
pub use graphs::{
    CountBucket, DateBucket, EMPTY_BUCKET_LABEL, Graph, MAX_COUNT_BUCKETS, TOTAL_GRAPH_TITLE,
    build_count_graph, build_date_graphs, build_graphs,
};
pub use settings::{GraphViewSettings, SettingsInterval, parse_bool_setting};
