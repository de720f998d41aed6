use crate::core::ChartGeometry;
use crate::error::ChartResult;
use crate::model::{Direction, StructureSignal};
use crate::render::{
    ChartLayerKind, LinePrimitive, RenderFrame, Stroke, TextHAlign, TextPrimitive,
};
use crate::theme::ChartTheme;

const LABEL_FONT_PX: f64 = 10.0;
const LINE_OPACITY: f64 = 0.6;

/// One full-width dashed level line plus a tag per BOS/CHoCH signal.
pub(crate) fn append_structure_signals(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    signals: &[StructureSignal],
    theme: &ChartTheme,
) -> ChartResult<()> {
    let bar_count = geometry.bar_count();
    let plot = geometry.plot();
    for signal in signals {
        if !signal.is_renderable(bar_count) {
            tracing::debug!(index = signal.index, level = signal.level, "skipping structure signal");
            continue;
        }

        let color = match signal.direction {
            Direction::Bullish => theme.bull,
            Direction::Bearish => theme.bear,
        };
        let x = geometry.index_to_x(signal.index)?;
        let y = geometry.price_to_y(signal.level)?;

        frame.push_line(
            ChartLayerKind::Structure,
            LinePrimitive::new(0.0, y, plot.width, y, Stroke::dashed(color, 1.5, 6.0, 3.0))
                .with_opacity(LINE_OPACITY),
        );
        frame.push_text(
            ChartLayerKind::Structure,
            TextPrimitive::new(
                signal.kind.label(),
                x + 10.0,
                y - 5.0,
                LABEL_FONT_PX,
                color,
                TextHAlign::Left,
            )
            .semibold(),
        );
    }
    Ok(())
}
