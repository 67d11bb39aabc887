use std::f64::consts::PI;

use crate::graph::SourceGraph;
use crate::layout::Point;
use crate::layout::circular::ring;

/// All nodes on a single unit shell, first node at angle pi.
///
/// Unlike the other algorithms the shell is not re-centered.
pub fn layout(graph: &SourceGraph) -> Vec<Point> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![Point::ORIGIN; n];
    }
    ring(n, PI)
}
