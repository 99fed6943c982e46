//! Core engine for graphplay - deterministic graph algorithms with step traces
//!
//! Every algorithm is a pure function over an [`graph::AlgoInput`]: it builds
//! its own working structures per call, records an append-only visit trace,
//! and returns the trace plus a reconstructed path. The trace is the
//! authoritative animation timeline consumed by [`playback::Playback`].

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod playback;

pub use graph::algos::{default_algorithm, get_algorithm, Algorithm, ALGORITHMS};
pub use graph::types::{AlgoInput, AlgoResult, AlgoStep, Edge, NodeId, StepType};
