use petgraph::algo::dijkstra;

use crate::graph::SourceGraph;
use crate::layout::{Point, circular, rescale};

const MAX_ITERATIONS: usize = 300;
const TOLERANCE: f64 = 1e-6;

/// Kamada-Kawai placement: Euclidean distances track hop distances.
///
/// The spring energy is minimized by stress majorization (weights d^-2),
/// starting from the circular layout, so the result is deterministic.
pub fn layout(graph: &SourceGraph) -> Vec<Point> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![Point::ORIGIN; n];
    }

    let target = hop_distances(graph);
    let mut pos = circular::layout(graph);

    for _ in 0..MAX_ITERATIONS {
        let mut largest_move: f64 = 0.0;
        for i in 0..n {
            let (mut sum_x, mut sum_y, mut sum_w) = (0.0, 0.0, 0.0);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = target[i][j];
                let w = 1.0 / (d * d);
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let current = dx.hypot(dy);
                let (ux, uy) = if current > f64::EPSILON {
                    (dx / current, dy / current)
                } else {
                    (0.0, 0.0)
                };
                sum_x += w * (pos[j].x + d * ux);
                sum_y += w * (pos[j].y + d * uy);
                sum_w += w;
            }
            let next = Point::new(sum_x / sum_w, sum_y / sum_w);
            largest_move = largest_move.max(next.distance(&pos[i]));
            pos[i] = next;
        }
        if largest_move < TOLERANCE {
            break;
        }
    }

    rescale(&mut pos);
    pos
}

/// All-pairs hop counts in `node_indices()` order.
///
/// Pairs in different components get one more than the longest finite distance.
fn hop_distances(graph: &SourceGraph) -> Vec<Vec<f64>> {
    let indices = graph.node_indices();
    let dist: Vec<Vec<Option<usize>>> = indices
        .iter()
        .map(|&start| {
            let reached = dijkstra(&graph.graph, start, None, |_| 1usize);
            indices.iter().map(|index| reached.get(index).copied()).collect()
        })
        .collect();

    let longest = dist
        .iter()
        .flatten()
        .filter_map(|d| *d)
        .max()
        .unwrap_or(0);
    let unreachable = longest + 1;

    dist.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|d| d.unwrap_or(unreachable) as f64)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::graph;

    #[test]
    fn hop_distances_cover_components() {
        let g = graph(&[("A", "B"), ("B", "C")], &["D"]);
        let d = hop_distances(&g);
        assert_eq!(d[0][1], 1.0);
        assert_eq!(d[0][2], 2.0);
        assert_eq!(d[0][0], 0.0);
        assert_eq!(d[0][3], 3.0);
        assert_eq!(d[3][3], 0.0);
    }

    #[test]
    fn path_is_stretched_out() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D")], &[]);
        let p = layout(&g);
        let ends = p[0].distance(&p[3]);
        assert!(ends > p[0].distance(&p[1]));
        assert!(ends > p[1].distance(&p[2]));
        assert!(ends > p[2].distance(&p[3]));
    }
}
