use std::fmt::Write as _;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, CirclePrimitive, Color, FontWeight, LinePrimitive, LineStrokeStyle,
    RectFill, RectPrimitive, RenderFrame, Renderer, Stroke, TextHAlign, TextPrimitive,
};

/// Serializes a validated frame into a standalone SVG document.
///
/// The `Background` layer is emitted in canvas coordinates; every other layer
/// is wrapped in one `<g>` translated by the frame margins, mirroring the
/// plot-relative coordinate space the primitives were built in.
pub fn svg_document(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;

    let patterns = collect_hatch_patterns(frame);
    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.canvas.width,
        h = frame.canvas.height,
    );

    if !patterns.is_empty() {
        doc.push_str("<defs>\n");
        for (key, id) in &patterns {
            let span = num(key.spacing.into_inner());
            let _ = writeln!(
                doc,
                r#"<pattern id="{id}" patternUnits="userSpaceOnUse" width="{span}" height="{span}"><line x1="0" y1="{span}" x2="{span}" y2="0" stroke="{color}" stroke-width="1.5"/></pattern>"#,
                color = css_color(key.color()),
            );
        }
        doc.push_str("</defs>\n");
    }

    for layer in frame.layers() {
        if layer.is_empty() {
            continue;
        }
        if layer.kind == ChartLayerKind::Background {
            write_layer(&mut doc, layer, &patterns);
            continue;
        }
        let _ = writeln!(
            doc,
            r#"<g transform="translate({x}, {y})">"#,
            x = num(frame.margins.left),
            y = num(frame.margins.top),
        );
        write_layer(&mut doc, layer, &patterns);
        doc.push_str("</g>\n");
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Rendering backend producing an SVG document string per frame.
#[derive(Debug, Default, Clone)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent [`Renderer::render`] call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.document = svg_document(frame)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HatchKey {
    red: OrderedFloat<f64>,
    green: OrderedFloat<f64>,
    blue: OrderedFloat<f64>,
    alpha: OrderedFloat<f64>,
    spacing: OrderedFloat<f64>,
}

impl HatchKey {
    fn new(color: Color, spacing_px: f64) -> Self {
        Self {
            red: OrderedFloat(color.red),
            green: OrderedFloat(color.green),
            blue: OrderedFloat(color.blue),
            alpha: OrderedFloat(color.alpha),
            spacing: OrderedFloat(spacing_px),
        }
    }

    fn color(self) -> Color {
        Color::rgba(
            self.red.into_inner(),
            self.green.into_inner(),
            self.blue.into_inner(),
            self.alpha.into_inner(),
        )
    }
}

fn collect_hatch_patterns(frame: &RenderFrame) -> IndexMap<HatchKey, String> {
    let mut patterns = IndexMap::new();
    for layer in frame.layers() {
        for rect in &layer.rects {
            if let Some(RectFill::Hatched { color, spacing_px }) = rect.fill {
                let next_id = format!("hatch-{}", patterns.len());
                patterns.entry(HatchKey::new(color, spacing_px)).or_insert(next_id);
            }
        }
    }
    patterns
}

fn write_layer(
    doc: &mut String,
    layer: &crate::render::LayerPrimitives,
    patterns: &IndexMap<HatchKey, String>,
) {
    for rect in &layer.rects {
        write_rect(doc, rect, patterns);
    }
    for line in &layer.lines {
        write_line(doc, line);
    }
    for circle in &layer.circles {
        write_circle(doc, circle);
    }
    for text in &layer.texts {
        write_text(doc, text);
    }
}

fn write_line(doc: &mut String, line: &LinePrimitive) {
    let _ = write!(
        doc,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
    );
    write_stroke_attrs(doc, line.stroke);
    write_opacity_attr(doc, line.opacity);
    doc.push_str("/>\n");
}

fn write_rect(doc: &mut String, rect: &RectPrimitive, patterns: &IndexMap<HatchKey, String>) {
    let _ = write!(
        doc,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
    );
    if rect.corner_radius > 0.0 {
        let _ = write!(doc, r#" rx="{}""#, num(rect.corner_radius));
    }
    match rect.fill {
        None => doc.push_str(r#" fill="none""#),
        Some(RectFill::Solid(color)) => {
            let _ = write!(doc, r#" fill="{}""#, css_color(color));
        }
        Some(RectFill::Hatched { color, spacing_px }) => {
            let key = HatchKey::new(color, spacing_px);
            if let Some(id) = patterns.get(&key) {
                let _ = write!(doc, r#" fill="url(#{id})""#);
            }
        }
    }
    if let Some(stroke) = rect.stroke {
        write_stroke_attrs(doc, stroke);
    }
    write_opacity_attr(doc, rect.opacity);
    doc.push_str("/>\n");
}

fn write_circle(doc: &mut String, circle: &CirclePrimitive) {
    let _ = write!(
        doc,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        css_color(circle.fill),
    );
    if let Some(outline) = circle.outline {
        write_stroke_attrs(doc, outline);
    }
    write_opacity_attr(doc, circle.opacity);
    doc.push_str("/>\n");
}

fn write_text(doc: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = write!(
        doc,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        css_color(text.color),
    );
    if text.weight == FontWeight::SemiBold {
        doc.push_str(r#" font-weight="600""#);
    }
    let _ = write!(doc, ">{}</text>\n", escape_xml(&text.text));
}

fn write_stroke_attrs(doc: &mut String, stroke: Stroke) {
    let _ = write!(
        doc,
        r#" stroke="{}" stroke-width="{}""#,
        css_color(stroke.color),
        num(stroke.width_px),
    );
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = stroke.style {
        let _ = write!(
            doc,
            r#" stroke-dasharray="{},{}""#,
            num(dash_px),
            num(gap_px)
        );
    }
}

fn write_opacity_attr(doc: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(doc, r#" opacity="{}""#, num(opacity));
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel * 255.0).round() as u8;
    if color.alpha >= 1.0 {
        format!(
            "rgb({},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue)
        )
    } else {
        format!(
            "rgba({},{},{},{})",
            to_byte(color.red),
            to_byte(color.green),
            to_byte(color.blue),
            num(color.alpha)
        )
    }
}

/// Formats a pixel value with at most two decimal places, trimming trailing
/// zeros so output stays stable across platforms.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, num};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(3.456), "3.46"); // rounded to two places
        assert_eq!(num(12.10), "12.1");
    }

    #[test]
    fn xml_entities_are_escaped() {
        assert_eq!(escape_xml("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
