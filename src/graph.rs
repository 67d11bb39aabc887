use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::pairs::{EdgeKey, PairTable};

/// Undirected graph of knowledge sources, one per figure view.
#[derive(Debug, Clone, Default)]
pub struct SourceGraph {
    pub graph: StableUnGraph<String, EdgeKey>,
}

impl SourceGraph {
    /// Nodes and edges with a positive pre count.
    pub fn pre(table: &PairTable) -> Self {
        Self::build(table.pre_nodes(), table.pre_edges())
    }

    /// Nodes and edges with a positive post count.
    pub fn post(table: &PairTable) -> Self {
        Self::build(table.post_nodes(), table.post_edges())
    }

    /// Every surviving node and every edge of either view; used for layout.
    pub fn union(table: &PairTable) -> Self {
        Self::build(
            table.nodes().iter().map(String::as_str),
            table.edges().map(|(key, _)| key),
        )
    }

    pub fn build<'a>(
        nodes: impl IntoIterator<Item = &'a str>,
        edges: impl IntoIterator<Item = &'a EdgeKey>,
    ) -> Self {
        let mut graph = StableUnGraph::default();
        // Name lookups during construction; indices are stable afterwards.
        let mut node_index_map: HashMap<String, NodeIndex> = HashMap::new();
        for name in nodes {
            node_index_map
                .entry(name.to_string())
                .or_insert_with(|| graph.add_node(name.to_string()));
        }

        for key in edges {
            let (a, b) = key.endpoints();
            // Endpoints missing from the node list are pulled in rather than dropped.
            let a = *node_index_map
                .entry(a.to_string())
                .or_insert_with(|| graph.add_node(a.to_string()));
            let b = *node_index_map
                .entry(b.to_string())
                .or_insert_with(|| graph.add_node(b.to_string()));
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, key.clone());
            }
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    pub fn name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    pub fn edge_keys(&self) -> impl Iterator<Item = &EdgeKey> {
        self.graph.edge_indices().map(|edge| &self.graph[edge])
    }

    /// Edges as positions in `node_indices()` order, self-loops included.
    pub fn dense_edges(&self) -> Vec<(usize, usize)> {
        let position: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .enumerate()
            .map(|(i, index)| (index, i))
            .collect();
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| (position[&a], position[&b]))
            .collect()
    }

    /// Dense adjacency lists in `node_indices()` order, without self-loops.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.node_count()];
        for (a, b) in self.dense_edges() {
            if a != b {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::pairs::ExclusionFilter;

    fn names(graph: &SourceGraph) -> Vec<&str> {
        graph.node_indices().into_iter().map(|i| graph.name(i)).collect()
    }

    fn table(input: &str) -> PairTable {
        PairTable::from_reader(Cursor::new(input), &ExclusionFilter::new(["litcoin"])).unwrap()
    }

    #[test]
    fn views_follow_pre_and_post_membership() {
        let t = table("h\nA\tB\t3\t6\nB\tC\t0\t2\nlitcoin\tX\t1\t1\n");

        let pre = SourceGraph::pre(&t);
        assert_eq!(pre.node_count(), 2);
        assert_eq!(pre.edge_count(), 1);
        assert_eq!(names(&pre), vec!["A", "B"]);

        let post = SourceGraph::post(&t);
        assert_eq!(post.node_count(), 3);
        assert_eq!(post.edge_count(), 2);

        let union = SourceGraph::union(&t);
        assert_eq!(union.node_count(), 3);
        assert_eq!(union.edge_count(), 2);
        assert_eq!(names(&union), vec!["A", "B", "C"]);
    }

    #[test]
    fn reversed_pairs_are_one_edge() {
        let a = EdgeKey::new("A", "B");
        let b = EdgeKey::new("B", "A");
        let graph = SourceGraph::build(["A", "B"], [&a, &b]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn adjacency_skips_self_loops() {
        let keys = [EdgeKey::new("A", "A"), EdgeKey::new("A", "B")];
        let graph = SourceGraph::build(["A", "B", "C"], keys.iter());
        assert_eq!(graph.dense_edges().len(), 2);
        assert_eq!(graph.adjacency(), vec![vec![1], vec![0], vec![]]);
    }
}
