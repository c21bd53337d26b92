use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{DataPoint, PixelPosition};
use crate::error::{ChartError, ChartResult};
use crate::extensions::BarNumbersConfig;
use crate::interaction::{HoverController, HoverEvent, HoverPhase, TooltipState, TooltipSurface};
use crate::locale::LocaleTable;

use super::GraphOptions;

/// One hover-enabled graph: its options, data and tooltip controller.
pub struct GraphView<'a, S: TooltipSurface> {
    options: GraphOptions,
    controller: HoverController<'a, S>,
}

impl<S: TooltipSurface> GraphView<'static, S> {
    pub fn initialize(options: GraphOptions, surface: S) -> ChartResult<Self> {
        GraphView::initialize_with_locales(options, surface, LocaleTable::builtin())
    }
}

impl<'a, S: TooltipSurface> GraphView<'a, S> {
    pub fn initialize_with_locales(
        options: GraphOptions,
        surface: S,
        locales: &'a LocaleTable,
    ) -> ChartResult<Self> {
        if let Some(index) = options
            .data
            .iter()
            .position(|point| point.value.is_nan())
        {
            return Err(ChartError::InvalidData(format!(
                "data point {index} has a NaN value"
            )));
        }

        let hover_config = options.hover_config();
        debug!(
            points = options.data.len(),
            interval = options.date_interval_name().unwrap_or("<unset>"),
            language = hover_config.effective_language(),
            "initialize graph view"
        );
        let controller = HoverController::with_locales(surface, hover_config, locales);
        Ok(Self {
            options,
            controller,
        })
    }

    #[must_use]
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.options.data
    }

    #[must_use]
    pub fn controller(&self) -> &HoverController<'a, S> {
        &self.controller
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.controller.state()
    }

    #[must_use]
    pub fn hover_phase(&self) -> HoverPhase {
        self.controller.phase()
    }

    pub fn on_plot_hover(&mut self, event: HoverEvent) -> &TooltipState {
        self.controller.on_hover(event)
    }

    /// Hover by data index, as engines that report `dataIndex` do.
    ///
    /// An index past the end of the data is treated like leaving all points.
    pub fn on_hover_index(&mut self, index: Option<usize>, position: PixelPosition) -> &TooltipState {
        let point = index.and_then(|index| {
            let point = self.options.data.get(index).copied();
            if point.is_none() {
                warn!(index, len = self.options.data.len(), "hover index out of range");
            }
            point
        });
        self.controller.on_hover(HoverEvent { position, point })
    }

    /// `bars.numbers` options, read from `series.bars` or top-level `bars`.
    pub fn bar_numbers_config(&self) -> ChartResult<Option<BarNumbersConfig>> {
        let numbers = self
            .options
            .config
            .get("series")
            .and_then(|series| series.pointer("/bars/numbers"))
            .or_else(|| {
                self.options
                    .config
                    .get("bars")
                    .and_then(|bars| bars.get("numbers"))
            });
        let Some(numbers) = numbers else {
            return Ok(None);
        };
        serde_json::from_value::<BarNumbersConfig>(Value::clone(numbers))
            .map(Some)
            .map_err(|e| {
                ChartError::Serialization(format!("failed to parse bar numbers options: {e}"))
            })
    }

    pub fn into_surface(self) -> S {
        self.controller.into_surface()
    }
}
