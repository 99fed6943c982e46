use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::normalize::{reconstruct_path, unweighted_adjacency};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Shortest path by edge count via queue-based breadth-first traversal.
///
/// Steps are recorded in dequeue order, one per node; parent pointers are set
/// at discovery time. Terminates early once `end` is dequeued.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let adjacency = unweighted_adjacency(input);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut prev: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut steps: Vec<AlgoStep> = Vec::new();

    // A start outside the vertex set has no adjacency entry; visiting it
    // anyway would put an unknown node into the trace.
    if adjacency.contains_key(&input.start) {
        queue.push_back(input.start);
        visited.insert(input.start);
        prev.insert(input.start, None);
    }

    while let Some(node) = queue.pop_front() {
        steps.push(AlgoStep::visit(node));

        if node == input.end {
            break;
        }

        let Some(neighbors) = adjacency.get(&node) else {
            continue;
        };
        for &neighbor in neighbors {
            if visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor);
            prev.insert(neighbor, Some(node));
            queue.push_back(neighbor);
        }
    }

    let path = reconstruct_path(&prev, input.start, input.end);
    AlgoResult { path, steps }
}
