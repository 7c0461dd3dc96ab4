//! SVG rendering of the canonical graph.
//!
//! The renderer is a pure function from (graph, options) to a standalone
//! SVG document: each entity becomes a labeled shape, each resolvable link
//! a labeled connector. Dangling links are skipped, never a failure. The
//! caller owns whatever happens to the returned text.
//!
//! # Module Structure
//!
//! - [`layout`]: deterministic circular node placement
//! - [`svg`]: SVG document building and escaping

pub mod layout;
mod svg;

use tracing::debug;

use recongraph_core::{Entity, Graph, property_text};

use crate::layout::{LINE_HEIGHT, Placement, boundary_offset, circular_layout, size_for_lines};
use crate::svg::{LabelLine, SvgBuilder};

const ARROW_MARKER: &str = "arrow";

/// Options for diagram rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render every property as an additional label line (the rich mode);
    /// plain mode shows only value and type.
    pub show_properties: bool,
    /// Draw connectors with arrowheads. Undirected connectors are plain
    /// lines.
    pub directed: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_properties: false,
            directed: true,
        }
    }
}

/// Render the graph as an SVG diagram.
pub fn render_svg(graph: &Graph, options: &RenderOptions) -> String {
    let labels: Vec<Vec<LabelLine>> = graph
        .entities()
        .iter()
        .map(|entity| entity_label(entity, options.show_properties))
        .collect();
    let sizes: Vec<(f64, f64)> = labels
        .iter()
        .map(|lines| {
            let texts: Vec<String> = lines.iter().map(|l| l.text.clone()).collect();
            size_for_lines(&texts)
        })
        .collect();
    let (placements, width, height) = circular_layout(&sizes);

    let mut svg = SvgBuilder::new(width.max(120.0), height.max(120.0));
    if options.directed {
        svg.arrow_defs(ARROW_MARKER);
    }

    // nodes first, connectors on top so arrowheads stay visible
    for (lines, p) in labels.iter().zip(&placements) {
        if options.show_properties {
            svg.rounded_rect(
                p.x - p.half_width,
                p.y - p.half_height,
                p.half_width * 2.0,
                p.half_height * 2.0,
            );
        } else {
            svg.ellipse(p.x, p.y, p.half_width, p.half_height);
        }
        svg.label(p.x, p.y + 4.0, lines, LINE_HEIGHT);
    }

    let marker = options.directed.then_some(ARROW_MARKER);
    let mut skipped = 0usize;
    for link in graph.links() {
        let (Some(from), Some(to)) = (
            placement_of(graph, &placements, &link.source),
            placement_of(graph, &placements, &link.target),
        ) else {
            skipped += 1;
            continue;
        };

        if link.source == link.target {
            svg.loop_path(from.x, from.y - from.half_height, marker);
            svg.caption(from.x, from.y - from.half_height - 48.0, &link.relation);
            continue;
        }

        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let (sx, sy) = boundary_offset(from.half_width, from.half_height, dx, dy);
        let (tx, ty) = boundary_offset(to.half_width, to.half_height, -dx, -dy);
        let (x1, y1) = (from.x + sx, from.y + sy);
        let (x2, y2) = (to.x + tx, to.y + ty);

        svg.line(x1, y1, x2, y2, marker);
        svg.caption((x1 + x2) / 2.0, (y1 + y2) / 2.0 - 5.0, &link.relation);
    }

    debug!(
        nodes = graph.entity_count(),
        links = graph.link_count() - skipped,
        skipped,
        "svg rendered"
    );
    svg.build()
}

fn entity_label(entity: &Entity, show_properties: bool) -> Vec<LabelLine> {
    if !show_properties {
        return vec![
            LabelLine::plain(&entity.value),
            LabelLine::plain(format!("({})", entity.kind)),
        ];
    }

    let mut lines = vec![
        LabelLine::bold(&entity.value),
        LabelLine::italic(&entity.kind),
    ];
    for (key, value) in &entity.properties {
        lines.push(LabelLine::plain(format!("{key}: {}", property_text(value))));
    }
    lines
}

fn placement_of<'a>(
    graph: &Graph,
    placements: &'a [Placement],
    id: &str,
) -> Option<&'a Placement> {
    graph
        .entities()
        .iter()
        .position(|entity| entity.id == id)
        .map(|index| &placements[index])
}
