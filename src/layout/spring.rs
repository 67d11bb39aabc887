use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::SourceGraph;
use crate::layout::{Point, rescale};

const ITERATIONS: usize = 50;
const THRESHOLD: f64 = 1e-4;
const MIN_DISTANCE: f64 = 0.01;

/// Fruchterman-Reingold force-directed placement.
///
/// Starting positions come from a `StdRng` seeded with `seed`, so the same
/// graph and seed always give the same layout.
pub fn layout(graph: &SourceGraph, seed: u64) -> Vec<Point> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![Point::ORIGIN; n];
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect();

    let mut adjacent = vec![vec![false; n]; n];
    for (a, b) in graph.dense_edges() {
        adjacent[a][b] = true;
        adjacent[b][a] = true;
    }

    // Optimal pairwise distance for a unit area.
    let k = (1.0 / n as f64).sqrt();
    let extent = |axis: fn(&Point) -> f64, pos: &[Point]| {
        let (lo, hi) = pos
            .iter()
            .map(axis)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        hi - lo
    };
    let mut temperature = extent(|p: &Point| p.x, &pos).max(extent(|p: &Point| p.y, &pos)) * 0.1;
    let cooling = temperature / (ITERATIONS + 1) as f64;

    let mut displacement = vec![Point::ORIGIN; n];
    for _ in 0..ITERATIONS {
        for (i, disp) in displacement.iter_mut().enumerate() {
            *disp = Point::ORIGIN;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let distance = dx.hypot(dy).max(MIN_DISTANCE);
                let attraction = if adjacent[i][j] { distance / k } else { 0.0 };
                let force = k * k / (distance * distance) - attraction;
                disp.x += dx * force;
                disp.y += dy * force;
            }
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let length = disp.x.hypot(disp.y).max(MIN_DISTANCE);
            let step_x = disp.x * temperature / length;
            let step_y = disp.y * temperature / length;
            p.x += step_x;
            p.y += step_y;
            moved += step_x * step_x + step_y * step_y;
        }
        temperature -= cooling;

        if moved.sqrt() / (n as f64) < THRESHOLD {
            break;
        }
    }

    rescale(&mut pos);
    pos
}
