/*!
Node placement.

One layout is computed from the union graph and shared by both figure panels,
so a knowledge source sits at the same spot on the left and on the right.

Algorithms:
- `circular`, `shell`: closed-form placement on the unit circle.
- `spring`: seeded Fruchterman-Reingold.
- `kamada_kawai`: stress majorization over graph-theoretic distances.
- `spectral`: Laplacian eigenvectors.

All of them return a point for every node, isolated nodes included.
*/

pub mod circular;
pub mod kamada_kawai;
pub mod shell;
pub mod spectral;
pub mod spring;

use std::collections::HashMap;
use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

use crate::graph::SourceGraph;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum LayoutKind {
    Spring,
    #[value(name = "kamada_kawai")]
    KamadaKawai,
    #[default]
    Circular,
    Shell,
    Spectral,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Spring => "spring",
            LayoutKind::KamadaKawai => "kamada_kawai",
            LayoutKind::Circular => "circular",
            LayoutKind::Shell => "shell",
            LayoutKind::Spectral => "spectral",
        }
    }

    /// Place every node of `graph`. Only `spring` consumes the seed.
    pub fn compute(&self, graph: &SourceGraph, seed: u64) -> Layout {
        let points = match self {
            LayoutKind::Spring => spring::layout(graph, seed),
            LayoutKind::KamadaKawai => kamada_kawai::layout(graph),
            LayoutKind::Circular => circular::layout(graph),
            LayoutKind::Shell => shell::layout(graph),
            LayoutKind::Spectral => spectral::layout(graph),
        };
        Layout::from_points(graph, points)
    }
}

impl Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounding box of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Node name to 2D position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    positions: HashMap<String, Point>,
}

impl Layout {
    /// `points` are in `graph.node_indices()` order.
    fn from_points(graph: &SourceGraph, points: Vec<Point>) -> Self {
        let positions = graph
            .node_indices()
            .into_iter()
            .zip(points)
            .map(|(index, point)| (graph.name(index).to_string(), point))
            .collect();
        Layout { positions }
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold(
            Bounds {
                min: first,
                max: first,
            },
            |bounds, p| Bounds {
                min: Point::new(bounds.min.x.min(p.x), bounds.min.y.min(p.y)),
                max: Point::new(bounds.max.x.max(p.x), bounds.max.y.max(p.y)),
            },
        ))
    }
}

/// Center on the mean and scale so the largest coordinate magnitude is 1.
pub(crate) fn rescale(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
    for p in points.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
    }

    let lim = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    if lim > 0.0 {
        for p in points.iter_mut() {
            p.x /= lim;
            p.y /= lim;
        }
    }
}
