use std::collections::{HashMap, HashSet};

use crate::graph::normalize::{
    add_undirected_edge, dedup_nodes, init_adjacency, tree_path, undirected_edges,
};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Global MST via Kruskal, answered as a start-to-end path query.
///
/// Edges are normalized to undirected (minimum weight per unordered pair)
/// and sorted by (weight, source, target) so tie-breaking is deterministic.
/// The trace records the start up front, then each accepted edge's endpoints
/// on first touch, source before target. The final path is an unweighted BFS
/// over the MST-only adjacency.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let nodes = dedup_nodes(input);
    if !nodes.contains(&input.start) || !nodes.contains(&input.end) {
        return AlgoResult::empty();
    }

    let mut edges = undirected_edges(input);
    edges.sort_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    let mut disjoint_set = DisjointSet::new(&nodes);
    let mut mst_adjacency = init_adjacency(&nodes);
    let mut step_visited: HashSet<NodeId> = HashSet::new();
    let mut steps: Vec<AlgoStep> = Vec::new();

    step_visited.insert(input.start);
    steps.push(AlgoStep::visit(input.start));

    for edge in &edges {
        if !disjoint_set.union(edge.source, edge.target) {
            continue;
        }

        add_undirected_edge(&mut mst_adjacency, edge.source, edge.target);

        if step_visited.insert(edge.source) {
            steps.push(AlgoStep::visit(edge.source));
        }
        if step_visited.insert(edge.target) {
            steps.push(AlgoStep::visit(edge.target));
        }
    }

    AlgoResult {
        path: tree_path(&mst_adjacency, input.start, input.end),
        steps,
    }
}

/// Disjoint-set with union by rank and path-compressing find, used to reject
/// cycle-forming edges while the MST grows.
struct DisjointSet {
    parent: HashMap<NodeId, NodeId>,
    rank: HashMap<NodeId, u32>,
}

impl DisjointSet {
    fn new(nodes: &[NodeId]) -> Self {
        DisjointSet {
            parent: nodes.iter().map(|&id| (id, id)).collect(),
            rank: nodes.iter().map(|&id| (id, 0)).collect(),
        }
    }

    fn find(&mut self, node: NodeId) -> NodeId {
        let parent = match self.parent.get(&node) {
            Some(&parent) => parent,
            None => {
                self.parent.insert(node, node);
                self.rank.insert(node, 0);
                return node;
            }
        };

        if parent == node {
            return node;
        }

        let root = self.find(parent);
        self.parent.insert(node, root);
        root
    }

    fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }

        true
    }
}
