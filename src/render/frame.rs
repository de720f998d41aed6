use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Margins};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Draw layers of one chart, bottom to top.
///
/// Overlapping annotations are expected; the stacking order below is part of
/// the rendering contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Background,
    Grid,
    PlanBands,
    Candles,
    SwingConnectors,
    SwingMarkers,
    Gaps,
    Structure,
    AxisLabels,
}

impl ChartLayerKind {
    /// All layers in canonical stacking order.
    #[must_use]
    pub const fn canonical_order() -> [Self; 9] {
        [
            Self::Background,
            Self::Grid,
            Self::PlanBands,
            Self::Candles,
            Self::SwingConnectors,
            Self::SwingMarkers,
            Self::Gaps,
            Self::Structure,
            Self::AxisLabels,
        ]
    }
}

/// Primitives collected for one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    fn new(kind: ChartLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Plot-layer coordinates are relative to the plot rectangle's top-left
/// corner; backends apply the margin translation once for the whole scene.
/// The `Background` layer is the exception: it is addressed in canvas
/// coordinates so it can cover the full surface including the margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: CanvasSize,
    pub margins: Margins,
    layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize, margins: Margins) -> Self {
        Self {
            canvas,
            margins,
            layers: ChartLayerKind::canonical_order()
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: ChartLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_circle(&mut self, kind: ChartLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    /// Layers in canonical stacking order.
    pub fn layers(&self) -> impl Iterator<Item = &LayerPrimitives> {
        self.layers.iter()
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
