use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Viewport, format_number};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextPrimitive};

pub const DEFAULT_BAR_NUMBER_TOP_OFFSET_PX: f64 = 3.0;

/// Per-series `bars.numbers` options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarNumbersConfig {
    #[serde(default = "default_show")]
    pub show: bool,
    /// Vertical offset from the bar top. Unset or zero means the default 3px.
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(skip, default = "default_text_color")]
    pub color: Color,
}

fn default_show() -> bool {
    true
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_text_color() -> Color {
    Color::BLACK
}

impl Default for BarNumbersConfig {
    fn default() -> Self {
        Self {
            show: default_show(),
            top: None,
            font_size_px: default_font_size_px(),
            color: default_text_color(),
        }
    }
}

impl BarNumbersConfig {
    #[must_use]
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Offset actually applied; a zero or non-finite setting falls back to the default.
    #[must_use]
    pub fn resolved_top_offset(&self) -> f64 {
        match self.top {
            Some(top) if top != 0.0 && top.is_finite() => top,
            _ => DEFAULT_BAR_NUMBER_TOP_OFFSET_PX,
        }
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar numbers `font_size_px` must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        Ok(self)
    }
}

/// Top-left canvas coordinate of one rendered bar and the value it plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarAnchor {
    pub left_px: f64,
    pub top_px: f64,
    pub value: f64,
}

impl BarAnchor {
    #[must_use]
    pub fn new(left_px: f64, top_px: f64, value: f64) -> Self {
        Self {
            left_px,
            top_px,
            value,
        }
    }
}

/// Offset of the plot area inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotOffset {
    pub left: f64,
    pub top: f64,
}

/// Builds one value label per bar at `(left, top + offset)`.
///
/// Bars whose value is not finite are skipped. A hidden config yields no labels.
pub fn place_bar_numbers(
    bars: &[BarAnchor],
    plot_offset: PlotOffset,
    config: BarNumbersConfig,
) -> ChartResult<Vec<TextPrimitive>> {
    let config = config.validate()?;
    if !config.show {
        return Ok(Vec::new());
    }

    let top_offset = config.resolved_top_offset();
    let mut texts = Vec::with_capacity(bars.len());
    for (index, bar) in bars.iter().enumerate() {
        if !bar.value.is_finite() {
            trace!(index, "skip bar number for non-finite value");
            continue;
        }
        texts.push(TextPrimitive::new(
            format_number(bar.value),
            bar.left_px + plot_offset.left,
            bar.top_px + plot_offset.top + top_offset,
            config.font_size_px,
            config.color,
        ));
    }
    Ok(texts)
}

/// Places bar numbers and hands them to `renderer` as one frame.
pub fn render_bar_numbers<R: Renderer>(
    renderer: &mut R,
    viewport: Viewport,
    bars: &[BarAnchor],
    plot_offset: PlotOffset,
    config: BarNumbersConfig,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    frame.texts = place_bar_numbers(bars, plot_offset, config)?;
    renderer.render(&frame)?;
    Ok(frame)
}
