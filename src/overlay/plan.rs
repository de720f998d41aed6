use crate::core::ChartGeometry;
use crate::error::ChartResult;
use crate::model::TradeSetup;
use crate::overlay::format_price;
use crate::render::{
    ChartLayerKind, LinePrimitive, RectFill, RectPrimitive, RenderFrame, Stroke, TextHAlign,
    TextPrimitive,
};
use crate::theme::ChartTheme;

const LABEL_FONT_PX: f64 = 10.0;
/// Highlight band half-width around the take-profit level, in price units.
const TP_BAND_HALF_SPAN: f64 = 2.0;
/// Highlight band extent above/below the stop-loss level, in price units.
const SL_BAND_ABOVE: f64 = 1.0;
const SL_BAND_BELOW: f64 = 3.0;

/// Take-profit, stop-loss and entry zone overlays.
///
/// Each level gets a translucent band; TP and SL additionally get a dashed
/// full-width line and a right-aligned price tag. Setups with non-finite
/// levels are skipped whole.
pub(crate) fn append_plan_overlays(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    setup: &TradeSetup,
    theme: &ChartTheme,
) -> ChartResult<()> {
    if !setup.is_renderable() {
        tracing::debug!(?setup.direction, "skipping trade setup with non-finite levels");
        return Ok(());
    }

    let plot = geometry.plot();

    // Take profit.
    let tp_y = geometry.price_to_y(setup.tp)?;
    let tp_band_top = geometry.price_to_y(setup.tp + TP_BAND_HALF_SPAN)?;
    let tp_band_bottom = geometry.price_to_y(setup.tp - TP_BAND_HALF_SPAN)?;
    frame.push_rect(
        ChartLayerKind::PlanBands,
        RectPrimitive::filled(
            0.0,
            tp_band_top,
            plot.width,
            (tp_band_bottom - tp_band_top).abs(),
            RectFill::Solid(theme.tp_band),
        ),
    );
    frame.push_line(
        ChartLayerKind::PlanBands,
        LinePrimitive::new(
            0.0,
            tp_y,
            plot.width,
            tp_y,
            Stroke::dashed(theme.bull, 1.5, 8.0, 4.0),
        ),
    );
    frame.push_text(
        ChartLayerKind::PlanBands,
        TextPrimitive::new(
            format!("TP {}", format_price(setup.tp)),
            plot.width - 5.0,
            tp_y - 5.0,
            LABEL_FONT_PX,
            theme.bull,
            TextHAlign::Right,
        ),
    );

    // Stop loss: the band is clamped into the plot before drawing.
    let sl_y = geometry.price_to_y(setup.sl)?;
    let sl_band_top = geometry.price_to_y(setup.sl + SL_BAND_ABOVE)?.max(0.0);
    let sl_band_bottom = geometry.price_to_y(setup.sl - SL_BAND_BELOW)?;
    let sl_band_height = (sl_band_bottom - sl_band_top)
        .min(plot.height - sl_band_top)
        .max(0.0);
    if sl_band_height > 0.0 {
        frame.push_rect(
            ChartLayerKind::PlanBands,
            RectPrimitive::filled(
                0.0,
                sl_band_top,
                plot.width,
                sl_band_height,
                RectFill::Solid(theme.sl_band),
            ),
        );
    }
    frame.push_line(
        ChartLayerKind::PlanBands,
        LinePrimitive::new(
            0.0,
            sl_y,
            plot.width,
            sl_y,
            Stroke::dashed(theme.bear, 1.5, 8.0, 4.0),
        ),
    );
    frame.push_text(
        ChartLayerKind::PlanBands,
        TextPrimitive::new(
            format!("SL {}", format_price(setup.sl)),
            plot.width - 5.0,
            sl_y + 12.0,
            LABEL_FONT_PX,
            theme.bear,
            TextHAlign::Right,
        ),
    );

    // Entry zone.
    let entry_top = geometry.price_to_y(setup.entry_high())?;
    let entry_bottom = geometry.price_to_y(setup.entry_low())?;
    frame.push_rect(
        ChartLayerKind::PlanBands,
        RectPrimitive::filled(
            0.0,
            entry_top,
            plot.width,
            (entry_bottom - entry_top).abs(),
            RectFill::Solid(theme.entry_band),
        ),
    );
    let entry_mid = (setup.entry_low() + setup.entry_high()) / 2.0;
    frame.push_text(
        ChartLayerKind::PlanBands,
        TextPrimitive::new(
            format!(
                "ENTRY {} - {}",
                format_price(setup.entry_low()),
                format_price(setup.entry_high())
            ),
            plot.width - 5.0,
            geometry.price_to_y(entry_mid)? + 4.0,
            LABEL_FONT_PX,
            theme.text_secondary,
            TextHAlign::Right,
        ),
    );

    Ok(())
}
