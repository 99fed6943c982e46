use std::collections::{HashMap, HashSet};

use crate::graph::normalize::{dedup_nodes, reconstruct_path, weighted_adjacency};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Shortest path by sum of non-negative edge weights.
///
/// Array-scan variant: each round settles the first unvisited node with
/// minimal tentative distance, in vertex-list order, then relaxes its
/// outgoing edges. Steps are recorded at settlement. Negative weights are
/// not guarded against; the greedy selection simply runs on them.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let adjacency = weighted_adjacency(input);
    let nodes = dedup_nodes(input);

    let mut distances: HashMap<NodeId, f64> =
        nodes.iter().map(|&id| (id, f64::INFINITY)).collect();
    let mut prev: HashMap<NodeId, Option<NodeId>> = nodes.iter().map(|&id| (id, None)).collect();
    let mut unvisited: HashSet<NodeId> = nodes.iter().copied().collect();
    let mut steps: Vec<AlgoStep> = Vec::new();

    distances.insert(input.start, 0.0);

    while !unvisited.is_empty() {
        // First node with minimal tentative distance, in vertex-list order.
        let mut current: Option<NodeId> = None;
        let mut current_distance = f64::INFINITY;
        for &id in &nodes {
            if !unvisited.contains(&id) {
                continue;
            }
            let distance = distances.get(&id).copied().unwrap_or(f64::INFINITY);
            if distance < current_distance {
                current = Some(id);
                current_distance = distance;
            }
        }

        // Only unreachable nodes remain.
        let Some(node) = current else {
            break;
        };

        unvisited.remove(&node);
        steps.push(AlgoStep::visit(node));

        if node == input.end {
            break;
        }

        let Some(neighbors) = adjacency.get(&node) else {
            continue;
        };
        for neighbor in neighbors {
            if !unvisited.contains(&neighbor.id) {
                continue;
            }
            let candidate = current_distance + neighbor.weight;
            let existing = distances.get(&neighbor.id).copied().unwrap_or(f64::INFINITY);
            if candidate < existing {
                distances.insert(neighbor.id, candidate);
                prev.insert(neighbor.id, Some(node));
            }
        }
    }

    let path = reconstruct_path(&prev, input.start, input.end);
    AlgoResult { path, steps }
}
