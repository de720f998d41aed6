//! Overlay renderer: maps domain data through a [`ChartGeometry`] into
//! positioned primitives, one builder per draw layer.
//!
//! Layer stacking is fixed (see [`ChartLayerKind::canonical_order`]); each
//! builder only appends into its own layer, so build order here does not
//! affect the final z-order.

mod axes;
mod candles;
mod gaps;
mod plan;
mod structure;
mod swings;

use crate::core::{CanvasSize, ChartGeometry, Margins};
use crate::error::ChartResult;
use crate::model::StockData;
use crate::render::{
    ChartLayerKind, RectFill, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::theme::ChartTheme;

const BACKGROUND_CORNER_RADIUS_PX: f64 = 8.0;

/// Builds the complete scene for one stock chart.
///
/// Absent annotation collections simply leave their layers empty; individual
/// records that cannot be mapped (stale index, non-finite level) are skipped.
/// An empty candle series produces the loading placeholder instead.
pub fn build_chart_frame(
    data: &StockData,
    canvas: CanvasSize,
    margins: Margins,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    let geometry = ChartGeometry::from_bars(&data.candles, canvas, margins)?;
    if geometry.is_empty() {
        return build_loading_frame(canvas, margins, theme);
    }

    let mut frame = RenderFrame::new(canvas, margins);
    append_background(&mut frame, canvas, theme);
    axes::append_grid(&mut frame, &geometry, theme)?;
    if let Some(setup) = &data.setup {
        plan::append_plan_overlays(&mut frame, &geometry, setup, theme)?;
    }
    candles::append_candles(&mut frame, &geometry, &data.candles, theme)?;
    swings::append_swing_overlays(&mut frame, &geometry, &data.swing_points, theme)?;
    gaps::append_gaps(&mut frame, &geometry, &data.fvg, theme)?;
    structure::append_structure_signals(&mut frame, &geometry, &data.bos_choch, theme)?;
    axes::append_axis_labels(&mut frame, &geometry, &data.candles, theme)?;

    frame.validate()?;
    Ok(frame)
}

/// Placeholder scene shown while a chart has no data.
pub fn build_loading_frame(
    canvas: CanvasSize,
    margins: Margins,
    theme: &ChartTheme,
) -> ChartResult<RenderFrame> {
    let geometry = ChartGeometry::empty(canvas, margins)?;
    let plot = geometry.plot();

    let mut frame = RenderFrame::new(canvas, margins);
    append_background(&mut frame, canvas, theme);
    frame.push_text(
        ChartLayerKind::AxisLabels,
        TextPrimitive::new(
            "Loading data...",
            plot.width / 2.0,
            plot.height / 2.0,
            12.0,
            theme.text_secondary,
            TextHAlign::Center,
        ),
    );

    frame.validate()?;
    Ok(frame)
}

fn append_background(frame: &mut RenderFrame, canvas: CanvasSize, theme: &ChartTheme) {
    frame.push_rect(
        ChartLayerKind::Background,
        RectPrimitive::filled(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
            RectFill::Solid(theme.background),
        )
        .with_corner_radius(BACKGROUND_CORNER_RADIUS_PX),
    );
}

/// Shortest price rendering for overlay labels (`168.5`, not `168.50`).
fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
