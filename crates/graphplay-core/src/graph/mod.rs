pub mod algos;
pub(crate) mod normalize;
pub mod types;

pub use algos::{default_algorithm, get_algorithm, Algorithm, ALGORITHMS};
pub use types::{AlgoInput, AlgoResult, AlgoStep, Edge, NodeId, StepType};
