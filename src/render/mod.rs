mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any canvas backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from label and overlay logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
