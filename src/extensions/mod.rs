//! Optional overlays drawn on top of the host chart.

pub mod bar_numbers;

pub use bar_numbers::{
    BarAnchor, BarNumbersConfig, DEFAULT_BAR_NUMBER_TOP_OFFSET_PX, PlotOffset,
    place_bar_numbers, render_bar_numbers,
};
