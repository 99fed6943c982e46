//! Step-cursor playback over an algorithm trace.
//!
//! [`Playback`] is the state machine behind animated replay: it owns a trace
//! and a cursor, and derives the visited set, the current node, and the
//! highlighted path for whoever renders frames. Timing lives with the caller,
//! which drives [`Playback::advance`] from a single tick source per trace;
//! the cursor itself is synchronous and deterministic, so replaying indices
//! `0..k` always yields the exact visited set the algorithm had at step k.

use crate::graph::types::{AlgoResult, AlgoStep, NodeId};

/// Playback position and derived rendering state for one trace.
#[derive(Debug, Clone)]
pub struct Playback {
    result: AlgoResult,
    cursor: usize,
    playing: bool,
}

/// Progress through the trace, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percent: f64,
}

impl Playback {
    pub fn new(result: AlgoResult) -> Self {
        Playback {
            result,
            cursor: 0,
            playing: false,
        }
    }

    pub fn result(&self) -> &AlgoResult {
        &self.result
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The run is done when the cursor sits on the final step and playback
    /// is paused. An empty trace is trivially done.
    pub fn is_done(&self) -> bool {
        !self.playing && self.cursor >= self.result.steps.len().saturating_sub(1)
    }

    /// Start advancing. A no-op on an already-finished trace; `reset` first
    /// to replay.
    pub fn play(&mut self) {
        self.playing = self.cursor + 1 < self.result.steps.len();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.playing = false;
    }

    /// One tick: move the cursor forward while playing. Auto-pauses once the
    /// final step is reached. Returns the step the cursor landed on.
    pub fn advance(&mut self) -> Option<&AlgoStep> {
        if !self.playing {
            return None;
        }
        if self.cursor + 1 >= self.result.steps.len() {
            self.playing = false;
            return None;
        }

        self.cursor += 1;
        if self.cursor + 1 >= self.result.steps.len() {
            self.playing = false;
        }
        self.result.steps.get(self.cursor)
    }

    /// Nodes visited by steps `0..=cursor`, deduplicated in first-visit
    /// order.
    pub fn visited(&self) -> Vec<NodeId> {
        let mut seen = std::collections::HashSet::new();
        let mut visited = Vec::new();
        for step in self.result.steps.iter().take(self.cursor + 1) {
            if seen.insert(step.node_id) {
                visited.push(step.node_id);
            }
        }
        visited
    }

    /// Node under the cursor, if the trace is non-empty.
    pub fn current_node(&self) -> Option<NodeId> {
        let upper = self.cursor.min(self.result.steps.len().checked_sub(1)?);
        self.result.steps.get(upper).map(|step| step.node_id)
    }

    /// Consecutive path pairs to highlight. Empty until the run is done.
    pub fn path_edges(&self) -> Vec<(NodeId, NodeId)> {
        if !self.is_done() || self.result.path.len() < 2 {
            return Vec::new();
        }
        self.result
            .path
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    pub fn progress(&self) -> Progress {
        let total = self.result.steps.len();
        if total == 0 {
            return Progress {
                current: 0,
                total: 0,
                percent: 0.0,
            };
        }
        let current = (self.cursor + 1).min(total);
        Progress {
            current,
            total,
            percent: (current as f64 / total as f64) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(path: Vec<NodeId>, visits: Vec<NodeId>) -> AlgoResult {
        AlgoResult {
            path,
            steps: visits.into_iter().map(AlgoStep::visit).collect(),
        }
    }

    #[test]
    fn test_advance_walks_the_trace_in_order() {
        let mut playback = Playback::new(trace(vec![1, 3, 4], vec![1, 2, 3, 4]));
        playback.play();

        assert_eq!(playback.advance().map(|s| s.node_id), Some(2));
        assert_eq!(playback.advance().map(|s| s.node_id), Some(3));
        assert_eq!(playback.advance().map(|s| s.node_id), Some(4));
        assert!(!playback.is_playing());
        assert!(playback.is_done());
        assert!(playback.advance().is_none());
    }

    #[test]
    fn test_visited_set_matches_cursor_prefix() {
        let mut playback = Playback::new(trace(vec![], vec![1, 2, 3, 2, 4]));
        playback.play();

        assert_eq!(playback.visited(), vec![1]);
        playback.advance();
        playback.advance();
        assert_eq!(playback.visited(), vec![1, 2, 3]);
        playback.advance(); // duplicate visit of 2
        assert_eq!(playback.visited(), vec![1, 2, 3]);
        playback.advance();
        assert_eq!(playback.visited(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut playback = Playback::new(trace(vec![], vec![1, 2, 3]));
        playback.play();
        playback.advance();
        playback.pause();

        assert!(playback.advance().is_none());
        assert_eq!(playback.cursor(), 1);

        playback.play();
        assert_eq!(playback.advance().map(|s| s.node_id), Some(3));
    }

    #[test]
    fn test_reset_rewinds_to_start() {
        let mut playback = Playback::new(trace(vec![], vec![1, 2, 3]));
        playback.play();
        playback.advance();
        playback.reset();

        assert_eq!(playback.cursor(), 0);
        assert!(!playback.is_playing());
        assert_eq!(playback.current_node(), Some(1));
    }

    #[test]
    fn test_play_on_finished_trace_is_noop() {
        let mut playback = Playback::new(trace(vec![], vec![1])); // single step
        playback.play();
        assert!(!playback.is_playing());
        assert!(playback.is_done());
    }

    #[test]
    fn test_path_highlight_only_when_done() {
        let mut playback = Playback::new(trace(vec![1, 3, 4], vec![1, 2, 3, 4]));
        playback.play();
        assert!(playback.path_edges().is_empty());

        while playback.advance().is_some() {}
        assert!(playback.is_done());
        assert_eq!(playback.path_edges(), vec![(1, 3), (3, 4)]);
    }

    #[test]
    fn test_empty_trace() {
        let mut playback = Playback::new(trace(vec![], vec![]));
        playback.play();
        assert!(!playback.is_playing());
        assert!(playback.is_done());
        assert_eq!(playback.current_node(), None);
        assert!(playback.visited().is_empty());
        assert_eq!(playback.progress().total, 0);
    }

    #[test]
    fn test_progress_counts_steps() {
        let mut playback = Playback::new(trace(vec![], vec![1, 2, 3, 4]));
        assert_eq!(playback.progress().current, 1);
        playback.play();
        playback.advance();
        let progress = playback.progress();
        assert_eq!(progress.current, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent, 50.0);
    }
}
