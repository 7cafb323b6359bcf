//! Wind-sequence looping.

use serde::{Deserialize, Serialize};

/// Replay a window of wind frames instead of holding the last one.
///
/// When `enabled`, frames `from..=to` repeat forever once `to` is passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    #[serde(rename = "loop", default)]
    pub enabled: bool,
    #[serde(default)]
    pub from: usize,
    #[serde(default)]
    pub to: usize,
}

impl LoopConfig {
    /// Loop over frames `from..=to`.
    pub fn between(from: usize, to: usize) -> Self {
        Self {
            enabled: true,
            from,
            to,
        }
    }

    /// Whether the window fits inside a sequence of `num_frames`.
    pub fn is_valid_for(&self, num_frames: usize) -> bool {
        self.from <= self.to && self.to < num_frames
    }
}
