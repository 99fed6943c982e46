use std::collections::{HashMap, HashSet};

use crate::graph::normalize::{
    add_undirected_edge, dedup_nodes, init_adjacency, tree_path, undirected_edges,
    UndirectedEdge, WeightedNeighbor,
};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Single-source MST via Prim, answered as a start-to-end path query.
///
/// Grows one connected frontier outward from `start`. Candidate edges are
/// kept in a list re-sorted by weight before each pop; the sort is stable,
/// so weight ties resolve by frontier insertion order, which follows
/// adjacency order and therefore input edge order. Path reconstruction is
/// the same MST-adjacency BFS as Kruskal's.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let nodes = dedup_nodes(input);
    if !nodes.contains(&input.start) || !nodes.contains(&input.end) {
        return AlgoResult::empty();
    }

    let (mst_adjacency, steps) = grow_frontier(input, &nodes);

    AlgoResult {
        path: tree_path(&mst_adjacency, input.start, input.end),
        steps,
    }
}

struct FrontierEdge {
    from: NodeId,
    to: NodeId,
    weight: f64,
}

/// Frontier loop: returns the MST adjacency and the visit trace.
fn grow_frontier(
    input: &AlgoInput,
    nodes: &[NodeId],
) -> (HashMap<NodeId, Vec<NodeId>>, Vec<AlgoStep>) {
    let edges = undirected_edges(input);
    let adjacency = candidate_adjacency(nodes, &edges);

    let mut mst_adjacency = init_adjacency(nodes);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut steps: Vec<AlgoStep> = Vec::new();
    let mut frontier: Vec<FrontierEdge> = Vec::new();

    visited.insert(input.start);
    steps.push(AlgoStep::visit(input.start));

    if let Some(neighbors) = adjacency.get(&input.start) {
        for neighbor in neighbors {
            frontier.push(FrontierEdge {
                from: input.start,
                to: neighbor.id,
                weight: neighbor.weight,
            });
        }
    }

    while !frontier.is_empty() && visited.len() < nodes.len() {
        // Stable sort: equal weights keep their insertion order.
        frontier.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        let next = frontier.remove(0);
        if visited.contains(&next.to) {
            continue;
        }

        visited.insert(next.to);
        steps.push(AlgoStep::visit(next.to));
        add_undirected_edge(&mut mst_adjacency, next.from, next.to);

        let Some(neighbors) = adjacency.get(&next.to) else {
            continue;
        };
        for neighbor in neighbors {
            if !visited.contains(&neighbor.id) {
                frontier.push(FrontierEdge {
                    from: next.to,
                    to: neighbor.id,
                    weight: neighbor.weight,
                });
            }
        }
    }

    (mst_adjacency, steps)
}

/// Weighted adjacency over the deduplicated undirected edges.
fn candidate_adjacency(
    nodes: &[NodeId],
    edges: &[UndirectedEdge],
) -> HashMap<NodeId, Vec<WeightedNeighbor>> {
    let mut map: HashMap<NodeId, Vec<WeightedNeighbor>> =
        nodes.iter().map(|&id| (id, Vec::new())).collect();

    for edge in edges {
        if let Some(neighbors) = map.get_mut(&edge.source) {
            neighbors.push(WeightedNeighbor {
                id: edge.target,
                weight: edge.weight,
            });
        }
        if let Some(neighbors) = map.get_mut(&edge.target) {
            neighbors.push(WeightedNeighbor {
                id: edge.source,
                weight: edge.weight,
            });
        }
    }

    map
}
