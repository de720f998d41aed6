use crate::core::ChartGeometry;
use crate::error::ChartResult;
use crate::model::{Direction, FairValueGap};
use crate::render::{ChartLayerKind, RectFill, RectPrimitive, RenderFrame, Stroke};
use crate::theme::ChartTheme;

const HATCH_SPACING_PX: f64 = 8.0;
const FILL_OPACITY: f64 = 0.3;
const BORDER_OPACITY: f64 = 0.5;

/// One hatched region plus a dashed border per fair value gap.
pub(crate) fn append_gaps(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    gaps: &[FairValueGap],
    theme: &ChartTheme,
) -> ChartResult<()> {
    let bar_count = geometry.bar_count();
    for gap in gaps {
        if !gap.is_renderable(bar_count) {
            tracing::debug!(
                start_index = gap.start_index,
                index = gap.index,
                "skipping fair value gap"
            );
            continue;
        }

        let color = match gap.bias {
            Direction::Bullish => theme.fvg_bullish,
            Direction::Bearish => theme.fvg_bearish,
        };
        let x = geometry.index_to_x(gap.start_index)?;
        let width = geometry.index_to_x(gap.index)? - x;
        let y = geometry.price_to_y(gap.top)?;
        let height = geometry.price_to_y(gap.bottom)? - y;

        frame.push_rect(
            ChartLayerKind::Gaps,
            RectPrimitive::filled(
                x,
                y,
                width,
                height,
                RectFill::Hatched {
                    color,
                    spacing_px: HATCH_SPACING_PX,
                },
            )
            .with_opacity(FILL_OPACITY),
        );
        frame.push_rect(
            ChartLayerKind::Gaps,
            RectPrimitive::outlined(x, y, width, height, Stroke::dashed(color, 1.0, 4.0, 2.0))
                .with_opacity(BORDER_OPACITY),
        );
    }
    Ok(())
}
