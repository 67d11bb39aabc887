use std::f64::consts::TAU;

use crate::graph::SourceGraph;
use crate::layout::{Point, rescale};

/// Nodes evenly spaced on the unit circle, first node at angle 0.
pub fn layout(graph: &SourceGraph) -> Vec<Point> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![Point::ORIGIN; n];
    }
    let mut points = ring(n, 0.0);
    rescale(&mut points);
    points
}

/// `n` points on the unit circle starting at `start` radians, counter-clockwise.
pub(crate) fn ring(n: usize, start: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = start + TAU * i as f64 / n as f64;
            Point::new(theta.cos(), theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::graph;

    fn close(a: Point, b: Point) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn four_nodes_sit_on_the_axes() {
        let g = graph(&[("A", "B")], &["C", "D"]);
        let points = layout(&g);
        assert!(close(points[0], Point::new(1.0, 0.0)));
        assert!(close(points[1], Point::new(0.0, 1.0)));
        assert!(close(points[2], Point::new(-1.0, 0.0)));
        assert!(close(points[3], Point::new(0.0, -1.0)));
    }

    #[test]
    fn ignores_edges() {
        let connected = graph(&[("A", "B"), ("B", "C")], &[]);
        let isolated = graph(&[], &["A", "B", "C"]);
        assert_eq!(layout(&connected), layout(&isolated));
    }
}
