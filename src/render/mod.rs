mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use frame::{ChartLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontWeight, LinePrimitive, LineStrokeStyle, RectFill, RectPrimitive,
    Stroke, TextHAlign, TextPrimitive,
};
pub use svg::{SvgRenderer, svg_document};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
