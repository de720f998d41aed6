use crate::core::{Bar, ChartGeometry, project_candles};
use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, LinePrimitive, RectFill, RectPrimitive, RenderFrame, Stroke,
};
use crate::theme::ChartTheme;

const BODY_CORNER_RADIUS_PX: f64 = 1.0;

/// One wick line and one body rect per bar, colored by close-vs-open.
pub(crate) fn append_candles(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    bars: &[Bar],
    theme: &ChartTheme,
) -> ChartResult<()> {
    for candle in project_candles(bars, geometry)? {
        let color = if candle.is_bullish {
            theme.bull
        } else {
            theme.bear
        };

        frame.push_line(
            ChartLayerKind::Candles,
            LinePrimitive::new(
                candle.center_x,
                candle.wick_top,
                candle.center_x,
                candle.wick_bottom,
                Stroke::solid(color, 1.0),
            ),
        );
        frame.push_rect(
            ChartLayerKind::Candles,
            RectPrimitive::filled(
                candle.body_left,
                candle.body_top,
                candle.body_right - candle.body_left,
                candle.body_height(),
                RectFill::Solid(color),
            )
            .with_corner_radius(BODY_CORNER_RADIUS_PX),
        );
    }
    Ok(())
}
