use std::collections::{HashMap, HashSet};

use crate::graph::normalize::{reconstruct_path, unweighted_adjacency};
use crate::graph::types::{AlgoInput, AlgoResult, AlgoStep, NodeId};

/// Finds some path (not necessarily shortest) via depth-first recursion.
///
/// Nodes are recorded pre-order, at recursion entry. The found flag
/// short-circuits every recursion level once `end` is reached, so neighbor
/// order in the adjacency list (input edge order) decides which path wins.
#[tracing::instrument(skip(input), fields(start = %input.start, end = %input.end, nodes = input.nodes.len(), edges = input.edges.len()))]
pub fn run(input: &AlgoInput) -> AlgoResult {
    let adjacency = unweighted_adjacency(input);
    let mut search = DfsSearch {
        adjacency: &adjacency,
        end: input.end,
        visited: HashSet::new(),
        prev: HashMap::new(),
        steps: Vec::new(),
        found: false,
    };

    if adjacency.contains_key(&input.start) {
        search.visit(input.start, None);
    }

    let path = reconstruct_path(&search.prev, input.start, input.end);
    AlgoResult {
        path,
        steps: search.steps,
    }
}

struct DfsSearch<'a> {
    adjacency: &'a HashMap<NodeId, Vec<NodeId>>,
    end: NodeId,
    visited: HashSet<NodeId>,
    prev: HashMap<NodeId, Option<NodeId>>,
    steps: Vec<AlgoStep>,
    found: bool,
}

impl DfsSearch<'_> {
    fn visit(&mut self, node: NodeId, parent: Option<NodeId>) {
        if self.found || self.visited.contains(&node) {
            return;
        }

        self.visited.insert(node);
        self.prev.insert(node, parent);
        self.steps.push(AlgoStep::visit(node));

        if node == self.end {
            self.found = true;
            return;
        }

        let Some(neighbors) = self.adjacency.get(&node) else {
            return;
        };
        for &neighbor in neighbors {
            if !self.visited.contains(&neighbor) {
                self.visit(neighbor, Some(node));
            }
            if self.found {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    fn edge(source: NodeId, target: NodeId) -> Edge {
        Edge {
            source,
            target,
            directed: false,
            weight: Some(1.0),
        }
    }

    fn diamond() -> AlgoInput {
        AlgoInput {
            nodes: vec![1, 2, 3, 4],
            edges: vec![edge(1, 2), edge(2, 3), edge(1, 3), edge(3, 4)],
            start: 1,
            end: 4,
        }
    }

    fn node_ids(result: &AlgoResult) -> Vec<NodeId> {
        result.steps.iter().map(|s| s.node_id).collect()
    }

    #[test]
    fn test_first_neighbor_wins() {
        // Edge order sends the search through 2 before the direct 1-3 edge.
        let result = run(&diamond());
        assert_eq!(node_ids(&result), vec![1, 2, 3, 4]);
        assert_eq!(result.path, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_edge_order_changes_the_path() {
        let mut input = diamond();
        input.edges.swap(0, 2); // 1-3 now comes first
        let result = run(&input);
        assert_eq!(result.path, vec![1, 3, 4]);
        assert_eq!(node_ids(&result), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_short_circuit_stops_exploration() {
        let mut input = diamond();
        input.end = 2;
        let result = run(&input);
        assert_eq!(node_ids(&result), vec![1, 2]);
        assert_eq!(result.path, vec![1, 2]);
    }

    #[test]
    fn test_start_equals_end() {
        let mut input = diamond();
        input.end = 1;
        let result = run(&input);
        assert_eq!(result.path, vec![1]);
        assert_eq!(node_ids(&result), vec![1]);
    }

    #[test]
    fn test_disconnected_end() {
        let input = AlgoInput {
            nodes: vec![1, 2, 3],
            edges: vec![edge(1, 2)],
            start: 1,
            end: 3,
        };
        let result = run(&input);
        assert!(result.path.is_empty());
        assert_eq!(node_ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_missing_start_is_empty() {
        let mut input = diamond();
        input.start = 42;
        let result = run(&input);
        assert!(result.path.is_empty());
        assert!(result.steps.is_empty());
    }
}
