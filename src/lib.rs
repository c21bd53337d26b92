//! chart-hover: hover annotations for time-series charts.
//!
//! The crate turns a hovered data point into a granularity-aware, localized
//! date label, drives the floating tooltip that shows it, and places numeric
//! labels over bar-chart segments. Drawing axes and plots stays with the host
//! chart engine.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod locale;
pub mod render;
pub mod telemetry;
pub mod view;

pub use api::{GraphOptions, GraphView, LabelComposer, TooltipContent, compose};
pub use crate::core::{DataPoint, DateInterval, PixelPosition};
pub use error::{ChartError, ChartResult};
pub use interaction::{HoverConfig, HoverController, HoverEvent, HoverPhase, TooltipState};
pub use locale::{LocaleTable, MonthNames};
