//! Algorithm implementations and the static registry.
//!
//! The registry is an immutable table built at compile time; lookup is by
//! stable string id and enumeration follows registration order. Callers that
//! fail a lookup fall back to [`default_algorithm`].

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;

use crate::graph::types::{AlgoInput, AlgoResult};

/// Entry point shared by every algorithm.
pub type AlgoFn = fn(&AlgoInput) -> AlgoResult;

/// A registered algorithm: stable id, display name, entry point.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub run: AlgoFn,
}

/// Registration table. Order matters: it is the enumeration order for
/// selection UIs and the first entry is the caller fallback.
pub const ALGORITHMS: &[Algorithm] = &[
    Algorithm {
        id: "bfs",
        name: "Breadth-First Search",
        run: bfs::run,
    },
    Algorithm {
        id: "dfs",
        name: "Depth-First Search",
        run: dfs::run,
    },
    Algorithm {
        id: "dijkstra",
        name: "Dijkstra",
        run: dijkstra::run,
    },
    Algorithm {
        id: "bellman-ford",
        name: "Bellman-Ford",
        run: bellman_ford::run,
    },
    Algorithm {
        id: "kruskal",
        name: "Kruskal (MST)",
        run: kruskal::run,
    },
    Algorithm {
        id: "prim",
        name: "Prim (MST)",
        run: prim::run,
    },
];

/// Look up an algorithm by its stable id.
pub fn get_algorithm(id: &str) -> Option<&'static Algorithm> {
    ALGORITHMS.iter().find(|algo| algo.id == id)
}

/// First-registered algorithm, used as the fallback when lookup fails.
pub fn default_algorithm() -> &'static Algorithm {
    &ALGORITHMS[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Edge;

    fn fixture() -> AlgoInput {
        AlgoInput {
            nodes: vec![1, 2, 3, 4],
            edges: vec![
                Edge {
                    source: 1,
                    target: 2,
                    directed: false,
                    weight: Some(1.0),
                },
                Edge {
                    source: 2,
                    target: 3,
                    directed: false,
                    weight: Some(1.0),
                },
                Edge {
                    source: 1,
                    target: 3,
                    directed: false,
                    weight: Some(5.0),
                },
                Edge {
                    source: 3,
                    target: 4,
                    directed: false,
                    weight: Some(1.0),
                },
            ],
            start: 1,
            end: 4,
        }
    }

    #[test]
    fn test_lookup_by_id() {
        for id in ["bfs", "dfs", "dijkstra", "bellman-ford", "kruskal", "prim"] {
            let algo = get_algorithm(id).unwrap();
            assert_eq!(algo.id, id);
        }
        assert!(get_algorithm("a-star").is_none());
        assert!(get_algorithm("").is_none());
    }

    #[test]
    fn test_default_is_first_registered() {
        assert_eq!(default_algorithm().id, "bfs");
        assert_eq!(default_algorithm().id, ALGORITHMS[0].id);
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let ids: Vec<&str> = ALGORITHMS.iter().map(|algo| algo.id).collect();
        assert_eq!(
            ids,
            vec!["bfs", "dfs", "dijkstra", "bellman-ford", "kruskal", "prim"]
        );
    }

    #[test]
    fn test_every_algorithm_is_idempotent() {
        let input = fixture();
        for algo in ALGORITHMS {
            let first = (algo.run)(&input);
            let second = (algo.run)(&input);
            assert_eq!(first, second, "{} not idempotent", algo.id);
        }
    }

    #[test]
    fn test_every_path_starts_and_ends_correctly() {
        let input = fixture();
        for algo in ALGORITHMS {
            let result = (algo.run)(&input);
            assert_eq!(result.path.first(), Some(&input.start), "{}", algo.id);
            assert_eq!(result.path.last(), Some(&input.end), "{}", algo.id);
            assert!(
                result.steps.iter().all(|s| input.nodes.contains(&s.node_id)),
                "{} stepped outside the vertex set",
                algo.id
            );
        }
    }
}
