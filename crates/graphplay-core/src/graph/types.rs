use serde::{Deserialize, Serialize};

/// Node identifier, unique within a graph.
///
/// Labels, positions, and other node attributes are a renderer concern and
/// never reach the engine.
pub type NodeId = i64;

/// A single edge of the input graph.
///
/// Multiple edges between the same ordered pair may exist; each algorithm
/// deduplicates per its own policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// A directed edge contributes only source->target; an undirected one
    /// contributes both directions.
    #[serde(default)]
    pub directed: bool,
    /// Missing or non-finite weights are treated as 1.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Edge {
    /// Weight with the default applied: any absent or non-finite weight is 1.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() => w,
            _ => 1.0,
        }
    }
}

/// Input to a single algorithm invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgoInput {
    /// The full vertex set; order is irrelevant for correctness but fixes
    /// tie-breaking in Dijkstra's min-selection.
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    pub start: NodeId,
    pub end: NodeId,
}

/// Kind of trace event. Only visits exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Visit,
}

/// One entry of the animation timeline: a node became settled or discovered,
/// in the exact order the algorithm processed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoStep {
    #[serde(rename = "type")]
    pub step_type: StepType,
    #[serde(rename = "nodeId")]
    pub node_id: NodeId,
}

impl AlgoStep {
    pub fn visit(node_id: NodeId) -> Self {
        AlgoStep {
            step_type: StepType::Visit,
            node_id,
        }
    }
}

/// Result of a single algorithm invocation.
///
/// Invariant: a non-empty `path` begins at `start` and ends at `end`. An
/// empty `path` means no connection exists (or the input was degenerate);
/// `steps` still holds whatever exploration happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgoResult {
    pub path: Vec<NodeId>,
    pub steps: Vec<AlgoStep>,
}

impl AlgoResult {
    /// Empty result for degenerate inputs (missing start/end, no path).
    pub fn empty() -> Self {
        AlgoResult {
            path: Vec::new(),
            steps: Vec::new(),
        }
    }
}
