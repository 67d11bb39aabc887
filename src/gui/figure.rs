/*!
Toolkit-independent description of the two-panel figure.

The figure is resolved to plain positions and alphas before anything is
painted, which keeps the drawing code free of lookups and lets the panel
contents be checked without a window.
*/

use crate::graph::SourceGraph;
use crate::layout::{Bounds, Layout, Point};
use crate::pairs::{EdgeKey, PairTable};

pub const PRE_TITLE: &str = "(a) Knowledge Source Network (Pre > 0)";
pub const POST_TITLE: &str = "(b) Knowledge Source Network (Post > 0)";

/// Extra room around the outermost nodes, as a fraction of the half side.
const WORLD_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct NodeGlyph {
    pub label: String,
    pub pos: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStroke {
    pub key: EdgeKey,
    pub from: Point,
    pub to: Point,
    pub alpha: f32,
}

impl EdgeStroke {
    pub fn is_loop(&self) -> bool {
        self.key.is_loop()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelScene {
    pub title: &'static str,
    pub nodes: Vec<NodeGlyph>,
    pub edges: Vec<EdgeStroke>,
}

impl PanelScene {
    fn build(
        title: &'static str,
        graph: &SourceGraph,
        layout: &Layout,
        alpha: impl Fn(&EdgeKey) -> f32,
    ) -> Self {
        let nodes = graph
            .node_indices()
            .into_iter()
            .filter_map(|index| {
                let label = graph.name(index);
                let Some(pos) = layout.get(label) else {
                    tracing::warn!(node = label, "node missing from layout, not drawn");
                    return None;
                };
                Some(NodeGlyph {
                    label: label.to_string(),
                    pos,
                })
            })
            .collect();

        let edges = graph
            .edge_keys()
            .filter_map(|key| {
                let (a, b) = key.endpoints();
                Some(EdgeStroke {
                    key: key.clone(),
                    from: layout.get(a)?,
                    to: layout.get(b)?,
                    alpha: alpha(key),
                })
            })
            .collect();

        PanelScene { title, nodes, edges }
    }
}

/// Both panels plus the square world window they share.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub pre: PanelScene,
    pub post: PanelScene,
    pub world: Bounds,
}

impl Figure {
    pub fn build(table: &PairTable, layout: &Layout) -> Self {
        let pre_graph = SourceGraph::pre(table);
        let post_graph = SourceGraph::post(table);

        let pre = PanelScene::build(PRE_TITLE, &pre_graph, layout, |key| {
            table.alpha(key).unwrap_or(1.0)
        });
        let post = PanelScene::build(POST_TITLE, &post_graph, layout, |_| 1.0);

        tracing::debug!(
            pre_nodes = pre.nodes.len(),
            pre_edges = pre.edges.len(),
            post_nodes = post.nodes.len(),
            post_edges = post.edges.len(),
            "built figure"
        );

        Figure {
            pre,
            post,
            world: square_world(layout),
        }
    }

    pub fn panels(&self) -> [&PanelScene; 2] {
        [&self.pre, &self.post]
    }
}

/// Smallest centered square containing the whole layout, padded.
fn square_world(layout: &Layout) -> Bounds {
    let (center, half) = match layout.bounds() {
        Some(bounds) => (bounds.center(), bounds.width().max(bounds.height()) / 2.0),
        None => (Point::ORIGIN, 0.0),
    };
    let half = if half > f64::EPSILON { half } else { 1.0 };
    let half = half * (1.0 + WORLD_MARGIN);
    Bounds {
        min: Point::new(center.x - half, center.y - half),
        max: Point::new(center.x + half, center.y + half),
    }
}
