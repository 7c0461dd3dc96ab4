//! Deterministic node placement for the diagram renderer.
//!
//! Entities are spread around a circle in graph order. The layout is a
//! pure function of the node sizes, so rendering the same graph twice
//! yields identical coordinates.

use std::f64::consts::TAU;

/// Vertical distance between label lines, in user units.
pub const LINE_HEIGHT: f64 = 16.0;

/// Approximate advance width of one character of the label font.
pub const CHAR_WIDTH: f64 = 7.2;

const PAD_X: f64 = 18.0;
const PAD_Y: f64 = 10.0;
const MIN_RADIUS: f64 = 90.0;
const NODE_SPACING: f64 = 170.0;
const MARGIN: f64 = 40.0;

/// A placed node: center position plus half extents of its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub half_width: f64,
    pub half_height: f64,
}

/// Shape half extents for a stack of label lines.
pub fn size_for_lines(lines: &[String]) -> (f64, f64) {
    let longest = lines.iter().map(String::len).max().unwrap_or(0) as f64;
    let half_width = longest * CHAR_WIDTH / 2.0 + PAD_X;
    let half_height = lines.len().max(1) as f64 * LINE_HEIGHT / 2.0 + PAD_Y;
    (half_width, half_height)
}

/// Place nodes of the given half extents around a circle and size the
/// canvas to fit. Returns the placements plus the canvas width/height.
pub fn circular_layout(sizes: &[(f64, f64)]) -> (Vec<Placement>, f64, f64) {
    let count = sizes.len();
    let max_half_width = sizes.iter().map(|s| s.0).fold(0.0, f64::max);
    let max_half_height = sizes.iter().map(|s| s.1).fold(0.0, f64::max);

    let radius = if count <= 1 {
        0.0
    } else {
        MIN_RADIUS.max(count as f64 * NODE_SPACING / TAU)
    };

    let center_x = radius + max_half_width + MARGIN;
    let center_y = radius + max_half_height + MARGIN;

    let placements = sizes
        .iter()
        .enumerate()
        .map(|(index, &(half_width, half_height))| {
            // start at twelve o'clock and walk clockwise
            let angle = TAU * index as f64 / count.max(1) as f64 - TAU / 4.0;
            Placement {
                x: center_x + radius * angle.cos(),
                y: center_y + radius * angle.sin(),
                half_width,
                half_height,
            }
        })
        .collect();

    (placements, center_x * 2.0, center_y * 2.0)
}

/// Offset from an ellipse center to its boundary along direction (dx, dy).
///
/// Used to trim connectors so arrowheads rest on the shape outline rather
/// than at its center. Rounded rectangles are close enough to ellipses for
/// this purpose.
pub fn boundary_offset(half_width: f64, half_height: f64, dx: f64, dy: f64) -> (f64, f64) {
    let length = dx.hypot(dy);
    if length == 0.0 {
        return (0.0, 0.0);
    }
    let (ux, uy) = (dx / length, dy / length);
    let denom = (uy * half_width).hypot(ux * half_height);
    if denom == 0.0 {
        return (0.0, 0.0);
    }
    let boundary = half_width * half_height / denom;
    (ux * boundary, uy * boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_is_deterministic() {
        let sizes = vec![(40.0, 20.0), (60.0, 20.0), (40.0, 30.0)];
        assert_eq!(circular_layout(&sizes), circular_layout(&sizes));
    }

    #[test]
    fn single_node_sits_at_canvas_center() {
        let (placements, width, height) = circular_layout(&[(40.0, 20.0)]);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].x, width / 2.0);
        assert_eq!(placements[0].y, height / 2.0);
    }

    #[test]
    fn all_nodes_fit_inside_the_canvas() {
        let sizes: Vec<_> = (0..12).map(|i| (30.0 + i as f64, 20.0)).collect();
        let (placements, width, height) = circular_layout(&sizes);
        for p in &placements {
            assert!(p.x - p.half_width >= 0.0);
            assert!(p.y - p.half_height >= 0.0);
            assert!(p.x + p.half_width <= width);
            assert!(p.y + p.half_height <= height);
        }
    }

    #[test]
    fn boundary_offset_hits_the_axes() {
        let (ox, oy) = boundary_offset(40.0, 20.0, 1.0, 0.0);
        assert!((ox - 40.0).abs() < 1e-9);
        assert!(oy.abs() < 1e-9);

        let (ox, oy) = boundary_offset(40.0, 20.0, 0.0, -3.0);
        assert!(ox.abs() < 1e-9);
        assert!((oy + 20.0).abs() < 1e-9);
    }

    #[test]
    fn wider_labels_make_wider_shapes() {
        let (narrow, _) = size_for_lines(&["ab".to_string()]);
        let (wide, _) = size_for_lines(&["a considerably longer label".to_string()]);
        assert!(wide > narrow);
    }
}
