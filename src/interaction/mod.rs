mod surface;

use std::time::Duration;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::{LabelComposer, TooltipContent};
use crate::core::{DataPoint, DateInterval, PixelPosition, utc_offset};
use crate::locale::{FALLBACK_LANGUAGE, LocaleTable};

pub use surface::{DEFAULT_FADE_IN, RecordingTooltipSurface, TooltipStyle, TooltipSurface};

/// Pointer-relative placement of the tooltip's top-left corner.
///
/// Defaults to 40px up and 40px left so the hovered point stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self {
            dx: -40.0,
            dy: -40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverConfig {
    /// `None` renders every label field.
    pub max_interval: Option<DateInterval>,
    pub language: Option<String>,
    pub offset: TooltipOffset,
    pub fade_in: Duration,
    pub utc_offset: FixedOffset,
    pub style: TooltipStyle,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            max_interval: None,
            language: None,
            offset: TooltipOffset::default(),
            fade_in: DEFAULT_FADE_IN,
            utc_offset: utc_offset(),
            style: TooltipStyle::default(),
        }
    }
}

impl HoverConfig {
    #[must_use]
    pub fn with_max_interval(mut self, max_interval: Option<DateInterval>) -> Self {
        self.max_interval = max_interval;
        self
    }

    /// Sets the interval by name; unrecognized names render every field.
    #[must_use]
    pub fn with_interval_name(mut self, name: &str) -> Self {
        self.max_interval = DateInterval::parse_lenient(name);
        if self.max_interval.is_none() {
            trace!(interval = name, "unrecognized hover interval, rendering all fields");
        }
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: TooltipOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_fade_in(mut self, fade_in: Duration) -> Self {
        self.fade_in = fade_in;
        self
    }

    #[must_use]
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// Language used for month names; `en` when unset.
    #[must_use]
    pub fn effective_language(&self) -> &str {
        self.language.as_deref().unwrap_or(FALLBACK_LANGUAGE)
    }
}

/// One hover notification from the chart engine.
///
/// `point` is `None` when the pointer is not over any plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverEvent {
    pub position: PixelPosition,
    pub point: Option<DataPoint>,
}

impl HoverEvent {
    #[must_use]
    pub fn over(position: PixelPosition, point: DataPoint) -> Self {
        Self {
            position,
            point: Some(point),
        }
    }

    #[must_use]
    pub fn left(position: PixelPosition) -> Self {
        Self {
            position,
            point: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    Hidden,
    Shown,
}

/// Public tooltip state exposed to hosts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub position: PixelPosition,
}

/// Drives one chart's tooltip from its hover event stream.
///
/// Starts hidden. Every event over a point recomputes the label and position
/// and shows the tooltip; an event with no point hides it.
pub struct HoverController<'a, S: TooltipSurface> {
    surface: S,
    composer: LabelComposer<'a>,
    config: HoverConfig,
    state: TooltipState,
}

impl<S: TooltipSurface> HoverController<'static, S> {
    #[must_use]
    pub fn new(surface: S, config: HoverConfig) -> Self {
        Self::with_locales(surface, config, LocaleTable::builtin())
    }
}

impl<'a, S: TooltipSurface> HoverController<'a, S> {
    #[must_use]
    pub fn with_locales(mut surface: S, config: HoverConfig, locales: &'a LocaleTable) -> Self {
        surface.mount(&config.style);
        let composer = LabelComposer::new(locales).with_offset(config.utc_offset);
        Self {
            surface,
            composer,
            config,
            state: TooltipState::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        if self.state.visible {
            HoverPhase::Shown
        } else {
            HoverPhase::Hidden
        }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn tooltip_content(&self, point: DataPoint) -> TooltipContent {
        let label = self.composer.compose(
            point.timestamp_millis,
            self.config.max_interval,
            Some(self.config.effective_language()),
        );
        TooltipContent::new(label, point.value)
    }

    pub fn on_hover(&mut self, event: HoverEvent) -> &TooltipState {
        match event.point {
            Some(point) => self.on_point_hover(event.position, point),
            None => self.on_pointer_leave(),
        }
        &self.state
    }

    pub fn on_point_hover(&mut self, position: PixelPosition, point: DataPoint) {
        let content = self.tooltip_content(point);
        let anchor = position.offset_by(self.config.offset.dx, self.config.offset.dy);
        trace!(
            from = ?self.phase(),
            timestamp_millis = point.timestamp_millis,
            x = anchor.x,
            y = anchor.y,
            "show hover tooltip"
        );

        self.surface.show(&content, anchor, self.config.fade_in);
        self.state.visible = true;
        self.state.content = content.text();
        self.state.position = anchor;
    }

    pub fn on_pointer_leave(&mut self) {
        if !self.state.visible {
            return;
        }
        trace!("hide hover tooltip");
        self.surface.hide();
        self.state.visible = false;
    }

    /// Releases the surface; the controller otherwise lives as long as its chart.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
