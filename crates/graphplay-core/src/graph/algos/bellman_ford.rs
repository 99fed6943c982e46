use std::collections::{HashMap, HashSet};

use crate::graph::normalize::{dedup_nodes, directed_edges, reconstruct_path, DirectedEdge};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Shortest path with negative edge weights, plus negative-cycle detection.
///
/// Runs up to |nodes| - 1 relaxation passes over the directed-expanded edge
/// list, stopping early once a pass changes nothing. Each pass appends one
/// step per node whose distance improved, in first-touch order within that
/// pass. A post-loop scan that can still relax an edge means a negative
/// cycle is reachable: the path is suppressed but the trace is kept.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let nodes = dedup_nodes(input);
    if !nodes.contains(&input.start) || !nodes.contains(&input.end) {
        return AlgoResult::empty();
    }

    let edges = directed_edges(input);

    let mut distances: HashMap<NodeId, f64> =
        nodes.iter().map(|&id| (id, f64::INFINITY)).collect();
    let mut prev: HashMap<NodeId, Option<NodeId>> = nodes.iter().map(|&id| (id, None)).collect();
    let mut steps: Vec<AlgoStep> = Vec::new();

    distances.insert(input.start, 0.0);
    steps.push(AlgoStep::visit(input.start));

    for _pass in 1..nodes.len() {
        let mut changed = false;
        let mut touched: Vec<NodeId> = Vec::new();
        let mut touched_set: HashSet<NodeId> = HashSet::new();

        for edge in &edges {
            let source_distance = distances.get(&edge.source).copied().unwrap_or(f64::INFINITY);
            if source_distance == f64::INFINITY {
                continue;
            }

            let candidate = source_distance + edge.weight;
            let target_distance = distances.get(&edge.target).copied().unwrap_or(f64::INFINITY);
            if candidate < target_distance {
                distances.insert(edge.target, candidate);
                prev.insert(edge.target, Some(edge.source));
                if touched_set.insert(edge.target) {
                    touched.push(edge.target);
                }
                changed = true;
            }
        }

        for node in touched {
            steps.push(AlgoStep::visit(node));
        }

        if !changed {
            break;
        }
    }

    if has_reachable_negative_cycle(&edges, &distances) {
        return AlgoResult {
            path: Vec::new(),
            steps,
        };
    }

    AlgoResult {
        path: reconstruct_path(&prev, input.start, input.end),
        steps,
    }
}

/// One more relaxation scan: any improvable edge proves a negative cycle
/// reachable from the start.
fn has_reachable_negative_cycle(
    edges: &[DirectedEdge],
    distances: &HashMap<NodeId, f64>,
) -> bool {
    for edge in edges {
        let source_distance = distances.get(&edge.source).copied().unwrap_or(f64::INFINITY);
        if source_distance == f64::INFINITY {
            continue;
        }
        let target_distance = distances.get(&edge.target).copied().unwrap_or(f64::INFINITY);
        if source_distance + edge.weight < target_distance {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    fn directed(source: NodeId, target: NodeId, weight: f64) -> Edge {
        Edge {
            source,
            target,
            directed: true,
            weight: Some(weight),
        }
    }

    fn undirected(source: NodeId, target: NodeId, weight: f64) -> Edge {
        Edge {
            source,
            target,
            directed: false,
            weight: Some(weight),
        }
    }

    fn node_ids(result: &AlgoResult) -> Vec<NodeId> {
        result.steps.iter().map(|s| s.node_id).collect()
    }

    #[test]
    fn test_negative_weights_reroute_the_path() {
        // The 1->3 shortcut costs 2; going 1->2->3 costs 5 - 4 = 1.
        let input = AlgoInput {
            nodes: vec![1, 2, 3],
            edges: vec![
                directed(1, 2, 5.0),
                directed(2, 3, -4.0),
                directed(1, 3, 2.0),
            ],
            start: 1,
            end: 3,
        };
        let result = run(&input);
        assert_eq!(result.path, vec![1, 2, 3]);
    }

    #[test]
    fn test_negative_cycle_suppresses_path_keeps_trace() {
        let input = AlgoInput {
            nodes: vec![1, 2, 3],
            edges: vec![
                directed(1, 2, 1.0),
                directed(2, 3, -1.0),
                directed(3, 2, -1.0),
            ],
            start: 1,
            end: 3,
        };
        let result = run(&input);
        assert!(result.path.is_empty());
        // Start step, then per-pass first-touch order.
        assert_eq!(node_ids(&result), vec![1, 2, 3, 3, 2]);
    }

    #[test]
    fn test_start_step_precedes_relaxation() {
        let input = AlgoInput {
            nodes: vec![1, 2],
            edges: vec![directed(1, 2, 1.0)],
            start: 1,
            end: 2,
        };
        let result = run(&input);
        assert_eq!(node_ids(&result), vec![1, 2]);
        assert_eq!(result.path, vec![1, 2]);
    }

    #[test]
    fn test_missing_start_or_end_pre_validates() {
        let input = AlgoInput {
            nodes: vec![1, 2],
            edges: vec![directed(1, 2, 1.0)],
            start: 9,
            end: 2,
        };
        assert_eq!(run(&input), AlgoResult::empty());

        let input = AlgoInput {
            nodes: vec![1, 2],
            edges: vec![directed(1, 2, 1.0)],
            start: 1,
            end: 9,
        };
        assert_eq!(run(&input), AlgoResult::empty());
    }

    #[test]
    fn test_matches_dijkstra_on_non_negative_weights() {
        let input = AlgoInput {
            nodes: vec![1, 2, 3, 4],
            edges: vec![
                undirected(1, 2, 1.0),
                undirected(2, 3, 1.0),
                undirected(1, 3, 5.0),
                undirected(3, 4, 1.0),
            ],
            start: 1,
            end: 4,
        };
        let bf = run(&input);
        let dj = crate::graph::algos::dijkstra::run(&input);
        assert_eq!(path_weight(&input, &bf.path), path_weight(&input, &dj.path));
    }

    #[test]
    fn test_early_stop_on_stable_pass() {
        // A chain relaxes fully in one pass; later passes change nothing and
        // must not append duplicate steps.
        let input = AlgoInput {
            nodes: vec![1, 2, 3, 4],
            edges: vec![
                directed(1, 2, 1.0),
                directed(2, 3, 1.0),
                directed(3, 4, 1.0),
            ],
            start: 1,
            end: 4,
        };
        let result = run(&input);
        assert_eq!(node_ids(&result), vec![1, 2, 3, 4]);
        assert_eq!(result.path, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_undirected_negative_edge_is_a_two_node_cycle() {
        // Directed expansion turns one negative undirected edge into a
        // negative cycle between its endpoints.
        let input = AlgoInput {
            nodes: vec![1, 2],
            edges: vec![undirected(1, 2, -1.0)],
            start: 1,
            end: 2,
        };
        let result = run(&input);
        assert!(result.path.is_empty());
        assert!(!result.steps.is_empty());
    }

    fn path_weight(input: &AlgoInput, path: &[NodeId]) -> f64 {
        path.windows(2)
            .map(|pair| {
                input
                    .edges
                    .iter()
                    .filter(|e| {
                        (e.source == pair[0] && e.target == pair[1])
                            || (!e.directed && e.source == pair[1] && e.target == pair[0])
                    })
                    .map(Edge::effective_weight)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}
