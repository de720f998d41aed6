use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Validates frames and discards them. Useful for tests and dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()
    }
}
