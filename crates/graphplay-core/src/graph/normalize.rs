//! Input normalization shared by the algorithms.
//!
//! Each algorithm builds its working structures from these helpers once per
//! invocation. Self-loops and edges referencing nodes outside the vertex set
//! are silently dropped so that no trace step can ever name an unknown node.
//! Neighbor lists follow input edge order, which fixes tie-breaking for the
//! order-sensitive algorithms.

use std::collections::{HashMap, HashSet, VecDeque};

use super::types::{AlgoInput, NodeId};

/// Weighted adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WeightedNeighbor {
    pub id: NodeId,
    pub weight: f64,
}

/// Directed-expanded edge (Bellman-Ford relaxation form).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DirectedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Undirected edge with endpoints stored as (min, max).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UndirectedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// Vertex set deduplicated in first-seen order.
pub(crate) fn dedup_nodes(input: &AlgoInput) -> Vec<NodeId> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut nodes = Vec::new();
    for &id in &input.nodes {
        if seen.insert(id) {
            nodes.push(id);
        }
    }
    nodes
}

/// Unweighted adjacency for BFS/DFS. Undirected edges contribute both
/// directions; neighbor order follows input edge order.
pub(crate) fn unweighted_adjacency(input: &AlgoInput) -> HashMap<NodeId, Vec<NodeId>> {
    let mut map: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for &id in &input.nodes {
        map.entry(id).or_default();
    }

    for edge in &input.edges {
        if edge.source == edge.target {
            continue;
        }
        if !map.contains_key(&edge.source) || !map.contains_key(&edge.target) {
            continue;
        }

        if let Some(neighbors) = map.get_mut(&edge.source) {
            neighbors.push(edge.target);
        }
        if !edge.directed {
            if let Some(neighbors) = map.get_mut(&edge.target) {
                neighbors.push(edge.source);
            }
        }
    }

    map
}

/// Weighted adjacency for Dijkstra, with default weights applied.
pub(crate) fn weighted_adjacency(input: &AlgoInput) -> HashMap<NodeId, Vec<WeightedNeighbor>> {
    let mut map: HashMap<NodeId, Vec<WeightedNeighbor>> = HashMap::new();
    for &id in &input.nodes {
        map.entry(id).or_default();
    }

    for edge in &input.edges {
        if edge.source == edge.target {
            continue;
        }
        if !map.contains_key(&edge.source) || !map.contains_key(&edge.target) {
            continue;
        }

        let weight = edge.effective_weight();
        if let Some(neighbors) = map.get_mut(&edge.source) {
            neighbors.push(WeightedNeighbor {
                id: edge.target,
                weight,
            });
        }
        if !edge.directed {
            if let Some(neighbors) = map.get_mut(&edge.target) {
                neighbors.push(WeightedNeighbor {
                    id: edge.source,
                    weight,
                });
            }
        }
    }

    map
}

/// Directed expansion for Bellman-Ford: an undirected edge becomes two
/// directed entries. Parallel edges are kept as-is.
pub(crate) fn directed_edges(input: &AlgoInput) -> Vec<DirectedEdge> {
    let node_set: HashSet<NodeId> = input.nodes.iter().copied().collect();
    let mut normalized = Vec::new();

    for edge in &input.edges {
        if !node_set.contains(&edge.source) || !node_set.contains(&edge.target) {
            continue;
        }
        if edge.source == edge.target {
            continue;
        }

        let weight = edge.effective_weight();
        normalized.push(DirectedEdge {
            source: edge.source,
            target: edge.target,
            weight,
        });
        if !edge.directed {
            normalized.push(DirectedEdge {
                source: edge.target,
                target: edge.source,
                weight,
            });
        }
    }

    normalized
}

/// Undirected edges for the MST algorithms: parallel edges between the same
/// unordered pair collapse to the minimum weight. Output order is first-seen
/// input order, which Prim's frontier tie-breaking depends on.
pub(crate) fn undirected_edges(input: &AlgoInput) -> Vec<UndirectedEdge> {
    let node_set: HashSet<NodeId> = input.nodes.iter().copied().collect();
    let mut edges: Vec<UndirectedEdge> = Vec::new();
    let mut index: HashMap<(NodeId, NodeId), usize> = HashMap::new();

    for edge in &input.edges {
        if !node_set.contains(&edge.source) || !node_set.contains(&edge.target) {
            continue;
        }
        if edge.source == edge.target {
            continue;
        }

        let source = edge.source.min(edge.target);
        let target = edge.source.max(edge.target);
        let weight = edge.effective_weight();

        match index.get(&(source, target)) {
            Some(&slot) => {
                if weight < edges[slot].weight {
                    edges[slot].weight = weight;
                }
            }
            None => {
                index.insert((source, target), edges.len());
                edges.push(UndirectedEdge {
                    source,
                    target,
                    weight,
                });
            }
        }
    }

    edges
}

/// Empty adjacency keyed by every node, for building MST adjacency.
pub(crate) fn init_adjacency(nodes: &[NodeId]) -> HashMap<NodeId, Vec<NodeId>> {
    nodes.iter().map(|&id| (id, Vec::new())).collect()
}

/// Record an accepted MST edge in both directions.
pub(crate) fn add_undirected_edge(
    adjacency: &mut HashMap<NodeId, Vec<NodeId>>,
    source: NodeId,
    target: NodeId,
) {
    if let Some(neighbors) = adjacency.get_mut(&source) {
        neighbors.push(target);
    }
    if let Some(neighbors) = adjacency.get_mut(&target) {
        neighbors.push(source);
    }
}

/// Walk a predecessor map backward from `end`. Returns the empty path when
/// the walk does not terminate at `start` (disconnected).
pub(crate) fn reconstruct_path(
    prev: &HashMap<NodeId, Option<NodeId>>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    if !prev.contains_key(&end) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(node);
        current = prev.get(&node).copied().flatten();
    }
    path.reverse();

    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}

/// Unweighted BFS path query over an MST adjacency.
pub(crate) fn tree_path(
    adjacency: &HashMap<NodeId, Vec<NodeId>>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    if start == end {
        return vec![start];
    }
    if !adjacency.contains_key(&start) || !adjacency.contains_key(&end) {
        return Vec::new();
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut prev: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    queue.push_back(start);
    prev.insert(start, None);

    while let Some(node) = queue.pop_front() {
        if node == end {
            break;
        }
        let Some(neighbors) = adjacency.get(&node) else {
            continue;
        };
        for &neighbor in neighbors {
            if prev.contains_key(&neighbor) {
                continue;
            }
            prev.insert(neighbor, Some(node));
            queue.push_back(neighbor);
        }
    }

    reconstruct_path(&prev, start, end)
}
