//! Playback cursor over a computed traversal order.
//!
//! A pure state machine: the caller owns the timer and calls [`Playback::tick`]
//! every [`PlaybackSpeed::interval`]. The cursor `step` counts how many nodes
//! of the order are revealed, from `0` (nothing) to `order.len()` (finished).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Algorithm, Edge, Node, NodeKey};
use crate::playback::frontier::reconstruct_frontier;

/// Playback speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    #[serde(rename = "0.5x")]
    Half,
    #[default]
    #[serde(rename = "1x")]
    Normal,
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "4x")]
    Quadruple,
}

impl PlaybackSpeed {
    /// Every preset, slowest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Half, Self::Normal, Self::Double, Self::Quadruple]
    }

    /// Delay between two automatic steps.
    #[must_use]
    pub const fn interval(self) -> Duration {
        Duration::from_millis(match self {
            Self::Half => 2000,
            Self::Normal => 1000,
            Self::Double => 500,
            Self::Quadruple => 250,
        })
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Half => "0.5x",
            Self::Normal => "1x",
            Self::Double => "2x",
            Self::Quadruple => "4x",
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlaybackSpeed {
    type Err = String;

    /// Accepts a label (`"2x"`) or an interval in milliseconds (`"500"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|speed| {
                speed.label().eq_ignore_ascii_case(s)
                    || s.parse::<u128>().is_ok_and(|ms| ms == speed.interval().as_millis())
            })
            .ok_or_else(|| format!("unknown playback speed '{s}' (expected 0.5x, 1x, 2x or 4x)"))
    }
}

/// Step-by-step reveal of a traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback<K: NodeKey> {
    order: Vec<K>,
    algorithm: Algorithm,
    step: usize,
    playing: bool,
    speed: PlaybackSpeed,
}

impl<K: NodeKey> Playback<K> {
    /// New playback at step 0. Starts playing, as a freshly launched
    /// traversal does.
    #[must_use]
    pub fn new(order: Vec<K>, algorithm: Algorithm) -> Self {
        Self {
            order,
            algorithm,
            step: 0,
            playing: true,
            speed: PlaybackSpeed::default(),
        }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: PlaybackSpeed) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn order(&self) -> &[K] {
        &self.order
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub const fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step >= self.order.len()
    }

    /// Resume. A finished playback restarts from step 0.
    pub fn play(&mut self) {
        if self.is_finished() {
            self.step = 0;
        }
        self.playing = true;
    }

    pub const fn pause(&mut self) {
        self.playing = false;
    }

    /// Reveal one more node. Pauses. Returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.playing = false;
        self.step += 1;
        true
    }

    /// Hide the last revealed node. Pauses. Returns `false` at step 0.
    pub const fn step_backward(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.playing = false;
        self.step -= 1;
        true
    }

    /// Pause and rewind to step 0.
    pub const fn reset(&mut self) {
        self.playing = false;
        self.step = 0;
    }

    /// Reveal every node. Pauses.
    pub fn skip_to_end(&mut self) {
        self.playing = false;
        self.step = self.order.len();
    }

    /// Timer callback.
    ///
    /// While playing, advances one step and returns `true`. Reaching the end
    /// stops playback; a tick on a finished playback only clears `playing`.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.is_finished() {
            self.playing = false;
            return false;
        }
        self.step += 1;
        if self.is_finished() {
            debug!(steps = self.step, "playback finished");
            self.playing = false;
        }
        true
    }

    /// Nodes revealed so far, in traversal order.
    #[must_use]
    pub fn visited(&self) -> &[K] {
        &self.order[..self.step.min(self.order.len())]
    }

    /// Most recently revealed node.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.visited().last()
    }

    /// Revealed fraction in `[0, 1]`; `0` for an empty order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.order.is_empty() {
            0.0
        } else {
            self.step as f64 / self.order.len() as f64
        }
    }

    /// Open list waiting behind the revealed prefix: the queue or stack
    /// before the next node is processed.
    ///
    /// Never contains a node of [`Playback::visited`]. The stack replay pops
    /// in a different order than the DFS pre-order, so already-revealed
    /// entries are dropped here.
    #[must_use]
    pub fn frontier(&self, nodes: &[Node<K>], edges: &[Edge<K>], directed: bool) -> Vec<K> {
        if self.order.is_empty() {
            return Vec::new();
        }
        let open = reconstruct_frontier(&self.order, self.step + 1, nodes, edges, directed, self.algorithm);
        unvisited(open, self.visited())
    }
}

/// `open` without the entries already in `visited`, order preserved.
fn unvisited<K: NodeKey>(open: Vec<K>, visited: &[K]) -> Vec<K> {
    let seen: HashSet<&K> = visited.iter().collect();
    open.into_iter().filter(|id| !seen.contains(id)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn playback() -> Playback<u32> {
        Playback::new(vec![1, 2, 3], Algorithm::Bfs)
    }

    #[test]
    fn new_playback_starts_playing_at_zero() {
        let p = playback();
        assert_eq!(p.step(), 0);
        assert!(p.is_playing());
        assert!(p.visited().is_empty());
        assert_eq!(p.current(), None);
    }

    #[test]
    fn tick_advances_and_stops_at_end() {
        let mut p = playback();
        assert!(p.tick());
        assert!(p.tick());
        assert_eq!(p.visited(), &[1, 2]);
        assert!(p.is_playing());
        assert!(p.tick());
        assert!(p.is_finished());
        assert!(!p.is_playing());
        assert!(!p.tick());
        assert_eq!(p.step(), 3);
    }

    #[test]
    fn paused_tick_is_a_no_op() {
        let mut p = playback();
        p.pause();
        assert!(!p.tick());
        assert_eq!(p.step(), 0);
    }

    #[test]
    fn play_restarts_a_finished_playback() {
        let mut p = playback();
        p.skip_to_end();
        assert!(p.is_finished());
        assert!(!p.is_playing());
        p.play();
        assert_eq!(p.step(), 0);
        assert!(p.is_playing());
    }

    #[test]
    fn manual_steps_pause_and_clamp() {
        let mut p = playback();
        assert!(!p.step_backward());
        assert!(p.step_forward());
        assert!(!p.is_playing());
        assert_eq!(p.current(), Some(&1));
        p.skip_to_end();
        assert!(!p.step_forward());
        assert!(p.step_backward());
        assert_eq!(p.visited(), &[1, 2]);
        p.reset();
        assert_eq!(p.step(), 0);
        assert!(!p.is_playing());
    }

    #[test]
    fn progress_fraction() {
        let mut p = playback();
        assert!(p.progress().abs() < f64::EPSILON);
        p.skip_to_end();
        assert!((p.progress() - 1.0).abs() < f64::EPSILON);
        let empty: Playback<u32> = Playback::new(Vec::new(), Algorithm::Dfs);
        assert!(empty.progress().abs() < f64::EPSILON);
        assert!(empty.is_finished());
    }

    #[test]
    fn frontier_follows_the_cursor() {
        let nodes: Vec<Node<u32>> = [1, 2, 3].into_iter().map(Node::new).collect();
        let edges = vec![Edge::new(1, 2), Edge::new(1, 3)];
        let mut p = playback();
        assert_eq!(p.frontier(&nodes, &edges, false), vec![1]);
        p.step_forward();
        assert_eq!(p.frontier(&nodes, &edges, false), vec![2, 3]);
        p.skip_to_end();
        assert!(p.frontier(&nodes, &edges, false).is_empty());
    }

    #[test]
    fn frontier_skips_revealed_dfs_nodes() {
        // 1-2, 1-4, 2-3, 2-4, 4-5: the stack replay still holds 2 after 1, 2 are shown.
        let nodes: Vec<Node<u32>> = [1, 2, 3, 4, 5].into_iter().map(Node::new).collect();
        let edges = vec![Edge::new(1, 2), Edge::new(1, 4), Edge::new(2, 3), Edge::new(2, 4), Edge::new(4, 5)];
        let order = crate::graph::dfs(&nodes, &edges, Some(&1), false);
        let mut p = Playback::new(order, Algorithm::Dfs);
        loop {
            let frontier = p.frontier(&nodes, &edges, false);
            assert!(
                frontier.iter().all(|id| !p.visited().contains(id)),
                "step {}: {frontier:?} overlaps {:?}",
                p.step(),
                p.visited()
            );
            if !p.step_forward() {
                break;
            }
        }
    }

    #[test]
    fn unvisited_keeps_open_order() {
        assert_eq!(unvisited(vec![4, 2, 5, 3], &[1, 2, 3]), vec![4, 5]);
        assert!(unvisited(Vec::<u32>::new(), &[1]).is_empty());
    }

    #[test]
    fn speed_presets() {
        assert_eq!(PlaybackSpeed::default(), PlaybackSpeed::Normal);
        assert_eq!(PlaybackSpeed::Half.interval(), Duration::from_millis(2000));
        assert_eq!(PlaybackSpeed::Quadruple.interval(), Duration::from_millis(250));
        assert_eq!("2x".parse::<PlaybackSpeed>(), Ok(PlaybackSpeed::Double));
        assert_eq!("0.5X".parse::<PlaybackSpeed>(), Ok(PlaybackSpeed::Half));
        assert_eq!("250".parse::<PlaybackSpeed>(), Ok(PlaybackSpeed::Quadruple));
        assert!("3x".parse::<PlaybackSpeed>().is_err());
        let p = playback().with_speed(PlaybackSpeed::Double);
        assert_eq!(p.speed().label(), "2x");
    }

    #[test]
    fn speed_serde_uses_labels() {
        let json = serde_json::to_string(&PlaybackSpeed::Half).expect("serialize");
        assert_eq!(json, "\"0.5x\"");
        let back: PlaybackSpeed = serde_json::from_str("\"4x\"").expect("deserialize");
        assert_eq!(back, PlaybackSpeed::Quadruple);
    }
}
