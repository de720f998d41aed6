use crate::core::{Bar, ChartGeometry};
use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, LinePrimitive, RenderFrame, Stroke, TextHAlign, TextPrimitive,
};
use crate::theme::ChartTheme;

const GRID_OPACITY: f64 = 0.3;
const PRICE_LABEL_FONT_PX: f64 = 10.0;
const DATE_LABEL_FONT_PX: f64 = 9.0;

/// One dashed horizontal grid line per price tick.
pub(crate) fn append_grid(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    theme: &ChartTheme,
) -> ChartResult<()> {
    let plot = geometry.plot();
    for tick in geometry.price_ticks()? {
        frame.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(
                0.0,
                tick.y,
                plot.width,
                tick.y,
                Stroke::dashed(theme.grid, 0.5, 4.0, 4.0),
            )
            .with_opacity(GRID_OPACITY),
        );
    }
    Ok(())
}

/// Price labels to the right of the plot and date labels underneath it.
pub(crate) fn append_axis_labels(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    bars: &[Bar],
    theme: &ChartTheme,
) -> ChartResult<()> {
    let plot = geometry.plot();

    for tick in geometry.price_ticks()? {
        frame.push_text(
            ChartLayerKind::AxisLabels,
            TextPrimitive::new(
                format!("{:.2}", tick.price),
                plot.width + 5.0,
                tick.y + 4.0,
                PRICE_LABEL_FONT_PX,
                theme.text_secondary,
                TextHAlign::Left,
            ),
        );
    }

    for tick in geometry.date_ticks(bars)? {
        frame.push_text(
            ChartLayerKind::AxisLabels,
            TextPrimitive::new(
                tick.label,
                tick.x,
                plot.height + 15.0,
                DATE_LABEL_FONT_PX,
                theme.text_secondary,
                TextHAlign::Center,
            ),
        );
    }

    Ok(())
}
