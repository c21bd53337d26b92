use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so invalid overlay geometry is caught
/// without a canvas.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_text_count: usize,
    pub last_texts: Vec<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_text_count = frame.texts.len();
        self.last_texts = frame.texts.iter().map(|text| text.text.clone()).collect();
        Ok(())
    }
}
