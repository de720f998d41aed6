use crate::core::ChartGeometry;
use crate::error::ChartResult;
use crate::model::{SwingKind, SwingPoint};
use crate::render::{
    ChartLayerKind, CirclePrimitive, LinePrimitive, RenderFrame, Stroke, TextHAlign,
    TextPrimitive,
};
use crate::theme::ChartTheme;

const MARKER_RADIUS_PX: f64 = 4.0;
const LABEL_FONT_PX: f64 = 9.0;
const CONNECTOR_OPACITY: f64 = 0.6;

/// Swing point markers plus dashed connectors between consecutive points of
/// the same kind.
///
/// Records whose index no longer fits the bar sequence, or whose level is not
/// finite, are dropped one by one.
pub(crate) fn append_swing_overlays(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    swing_points: &[SwingPoint],
    theme: &ChartTheme,
) -> ChartResult<()> {
    let bar_count = geometry.bar_count();
    let mut renderable: Vec<SwingPoint> = Vec::with_capacity(swing_points.len());
    for point in swing_points {
        if point.is_renderable(bar_count) {
            renderable.push(*point);
        } else {
            tracing::debug!(index = point.index, level = point.level, "skipping swing point");
        }
    }
    // Connectors run in chronological order even if the records arrive shuffled.
    renderable.sort_by_key(|point| point.index);

    for kind in [SwingKind::SwingHigh, SwingKind::SwingLow] {
        let chain: Vec<&SwingPoint> = renderable
            .iter()
            .filter(|point| point.kind == kind)
            .collect();
        let color = match kind {
            SwingKind::SwingHigh => theme.bull,
            SwingKind::SwingLow => theme.bear,
        };
        for pair in chain.windows(2) {
            frame.push_line(
                ChartLayerKind::SwingConnectors,
                LinePrimitive::new(
                    geometry.index_to_x(pair[0].index)?,
                    geometry.price_to_y(pair[0].level)?,
                    geometry.index_to_x(pair[1].index)?,
                    geometry.price_to_y(pair[1].level)?,
                    Stroke::dashed(color, 1.5, 4.0, 2.0),
                )
                .with_opacity(CONNECTOR_OPACITY),
            );
        }
    }

    for point in &renderable {
        let x = geometry.index_to_x(point.index)?;
        let y = geometry.price_to_y(point.level)?;
        let (color, label, label_y) = match point.kind {
            SwingKind::SwingHigh => (theme.bull, "HH", y - 10.0),
            SwingKind::SwingLow => (theme.bear, "LL", y + 15.0),
        };

        frame.push_circle(
            ChartLayerKind::SwingMarkers,
            CirclePrimitive::new(x, y, MARKER_RADIUS_PX, color)
                .with_outline(Stroke::solid(theme.marker_outline, 1.0)),
        );
        frame.push_text(
            ChartLayerKind::SwingMarkers,
            TextPrimitive::new(label, x, label_y, LABEL_FONT_PX, color, TextHAlign::Center)
                .semibold(),
        );
    }

    Ok(())
}
