//! Command implementations for the graphplay CLI.

pub mod dispatch;

mod algos;
mod play;
mod run;

use std::path::Path;

use serde::Deserialize;

use graphplay_core::error::{GraphplayError, Result};
use graphplay_core::{AlgoInput, Edge, NodeId};

/// On-disk graph description: the vertex set plus the edge list. Start and
/// end come from the command line, not the file.
#[derive(Debug, Deserialize)]
struct GraphFile {
    nodes: Vec<NodeId>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Load a graph file and pair it with the requested endpoints.
fn load_input(path: &Path, from: NodeId, to: NodeId) -> Result<AlgoInput> {
    if !path.exists() {
        return Err(GraphplayError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let graph: GraphFile =
        serde_json::from_str(&raw).map_err(|e| GraphplayError::InvalidGraph {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(AlgoInput {
        nodes: graph.nodes,
        edges: graph.edges,
        start: from,
        end: to,
    })
}
