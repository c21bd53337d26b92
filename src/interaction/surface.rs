use std::fmt::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::TooltipContent;
use crate::core::PixelPosition;

pub const DEFAULT_FADE_IN: Duration = Duration::from_millis(200);

/// Visual style of the floating tooltip element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub element_id: String,
    pub border: String,
    pub padding: String,
    pub background_color: String,
    pub opacity: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            element_id: "tooltip".to_owned(),
            border: "1px solid #fdd".to_owned(),
            padding: "2px".to_owned(),
            background_color: "#fee".to_owned(),
            opacity: 0.8,
        }
    }
}

impl TooltipStyle {
    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Inline CSS for the element as first mounted: absolute and hidden.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from("position: absolute; display: none; ");
        let _ = write!(
            css,
            "border: {}; padding: {}; background-color: {}; opacity: {}",
            self.border, self.padding, self.background_color, self.opacity
        );
        css
    }
}

/// Display-layer seam for the single tooltip element of a chart.
///
/// `mount` is called exactly once, when the owning controller is created.
/// Later calls update that element in place.
pub trait TooltipSurface {
    fn mount(&mut self, style: &TooltipStyle);
    /// Sets content and position, then fades the element in over `fade_in`.
    ///
    /// The fade duration is advisory.
    fn show(&mut self, content: &TooltipContent, position: PixelPosition, fade_in: Duration);
    fn hide(&mut self);
}

/// Headless surface used by tests and non-DOM hosts.
///
/// Records what a real element would display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingTooltipSurface {
    pub mount_count: usize,
    pub style: Option<TooltipStyle>,
    pub visible: bool,
    pub text: Option<String>,
    pub html: Option<String>,
    pub position: Option<PixelPosition>,
    pub last_fade_in: Option<Duration>,
    pub show_count: usize,
    pub hide_count: usize,
}

impl TooltipSurface for RecordingTooltipSurface {
    fn mount(&mut self, style: &TooltipStyle) {
        self.mount_count += 1;
        self.style = Some(style.clone());
        self.visible = false;
    }

    fn show(&mut self, content: &TooltipContent, position: PixelPosition, fade_in: Duration) {
        self.text = Some(content.text());
        self.html = Some(content.html());
        self.position = Some(position);
        self.last_fade_in = Some(fade_in);
        self.visible = true;
        self.show_count += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hide_count += 1;
    }
}

impl<S: TooltipSurface + ?Sized> TooltipSurface for &mut S {
    fn mount(&mut self, style: &TooltipStyle) {
        (**self).mount(style);
    }

    fn show(&mut self, content: &TooltipContent, position: PixelPosition, fade_in: Duration) {
        (**self).show(content, position, fade_in);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}
