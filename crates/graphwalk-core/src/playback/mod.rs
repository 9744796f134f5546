//! Traversal playback support.
//!
//! - [`frontier`]: stateless replay of the BFS queue / DFS stack at any step.
//! - [`cursor`]: the play/pause/step state machine driven by a UI timer.

pub mod cursor;
pub mod frontier;

pub use cursor::{Playback, PlaybackSpeed};
pub use frontier::{FrontierReplay, reconstruct_frontier};
