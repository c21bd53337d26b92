mod graph_options;
mod graph_view;
mod label_composer;
mod tooltip_content;

pub use graph_options::{
    DATE_INTERVAL_KEY, EngineOptions, GRAPH_OPTIONS_JSON_SCHEMA_V1, GraphOptions,
    GraphOptionsJsonContractV1,
};
pub use graph_view::GraphView;
pub use label_composer::{
    LABEL_DELIMITER, LabelComposer, compose, compose_calendar_label, compose_with_interval_name,
};
pub use tooltip_content::TooltipContent;
