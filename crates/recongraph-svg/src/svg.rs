//! SVG document building utilities.

use std::fmt::Write;

/// Escape character data for SVG text content and attribute values.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Styling applied to one label line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Bold,
    Italic,
}

/// One line of a node label.
#[derive(Debug, Clone)]
pub struct LabelLine {
    pub text: String,
    pub style: LineStyle,
}

impl LabelLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Italic,
        }
    }
}

/// An SVG document builder for constructing a standalone vector image.
pub struct SvgBuilder {
    output: String,
}

impl SvgBuilder {
    /// Create a document of the given size with a viewBox, so the result
    /// scales when embedded.
    pub fn new(width: f64, height: f64) -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        let _ = writeln!(
            output,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\" font-family=\"Helvetica, Arial, sans-serif\">",
        );
        Self { output }
    }

    /// Declare the arrowhead marker referenced by directed connectors.
    pub fn arrow_defs(&mut self, id: &str) -> &mut Self {
        let _ = writeln!(self.output, "  <defs>");
        let _ = writeln!(
            self.output,
            "    <marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" markerWidth=\"7\" markerHeight=\"7\" orient=\"auto-start-reverse\">",
        );
        let _ = writeln!(
            self.output,
            "      <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"#555555\"/>"
        );
        let _ = writeln!(self.output, "    </marker>");
        let _ = writeln!(self.output, "  </defs>");
        self
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        let _ = writeln!(
            self.output,
            "  <ellipse cx=\"{cx:.1}\" cy=\"{cy:.1}\" rx=\"{rx:.1}\" ry=\"{ry:.1}\" fill=\"#f0f0f0\" stroke=\"#333333\"/>",
        );
        self
    }

    pub fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        let _ = writeln!(
            self.output,
            "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" rx=\"8\" fill=\"#f0f0f0\" stroke=\"#333333\"/>",
        );
        self
    }

    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        marker: Option<&str>,
    ) -> &mut Self {
        let _ = write!(
            self.output,
            "  <line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" stroke=\"#555555\"",
        );
        if let Some(marker) = marker {
            let _ = write!(self.output, " marker-end=\"url(#{marker})\"");
        }
        self.output.push_str("/>\n");
        self
    }

    /// A self-loop drawn as a cubic arc above the node.
    pub fn loop_path(&mut self, x: f64, y: f64, marker: Option<&str>) -> &mut Self {
        let _ = write!(
            self.output,
            "  <path d=\"M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}\" fill=\"none\" stroke=\"#555555\"",
            x - 12.0,
            y,
            x - 36.0,
            y - 44.0,
            x + 36.0,
            y - 44.0,
            x + 12.0,
            y,
        );
        if let Some(marker) = marker {
            let _ = write!(self.output, " marker-end=\"url(#{marker})\"");
        }
        self.output.push_str("/>\n");
        self
    }

    /// A small single-line caption, used for connector labels.
    pub fn caption(&mut self, x: f64, y: f64, text: &str) -> &mut Self {
        let _ = writeln!(
            self.output,
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"11\" fill=\"#444444\">{}</text>",
            escape(text),
        );
        self
    }

    /// A vertically centered stack of label lines at (x, y).
    pub fn label(&mut self, x: f64, y: f64, lines: &[LabelLine], line_height: f64) -> &mut Self {
        let top = y - line_height * (lines.len() as f64 - 1.0) / 2.0;
        let _ = writeln!(
            self.output,
            "  <text x=\"{x:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#111111\">",
        );
        for (index, line) in lines.iter().enumerate() {
            let line_y = top + line_height * index as f64;
            let style = match line.style {
                LineStyle::Plain => "",
                LineStyle::Bold => " font-weight=\"bold\"",
                LineStyle::Italic => " font-style=\"italic\"",
            };
            let _ = writeln!(
                self.output,
                "    <tspan x=\"{x:.1}\" y=\"{line_y:.1}\"{style}>{}</tspan>",
                escape(&line.text),
            );
        }
        self.output.push_str("  </text>\n");
        self
    }

    /// Finish building and return the SVG document.
    pub fn build(mut self) -> String {
        self.output.push_str("</svg>\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_well_formed_at_the_edges() {
        let mut svg = SvgBuilder::new(200.0, 100.0);
        svg.ellipse(100.0, 50.0, 40.0, 20.0);
        let doc = svg.build();

        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(doc.contains("viewBox=\"0 0 200 100\""));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn labels_escape_markup() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.label(50.0, 50.0, &[LabelLine::plain("a < b & c")], 16.0);
        let doc = svg.build();
        assert!(doc.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn marker_reference_matches_defs() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        svg.arrow_defs("arrow");
        svg.line(0.0, 0.0, 50.0, 50.0, Some("arrow"));
        let doc = svg.build();
        assert!(doc.contains("<marker id=\"arrow\""));
        assert!(doc.contains("marker-end=\"url(#arrow)\""));
    }
}
