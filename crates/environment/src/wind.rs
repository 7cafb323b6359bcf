//! Wind sequences.
//!
//! A wind sequence is an ordered list of airflow frames and a cursor that
//! marks the active one. The cursor either clamps at the last frame or, with
//! a [`LoopConfig`], cycles over a window of frames.

use crate::error::WindError;
use plume_types::{LoopConfig, Vector3};
use std::path::PathBuf;
use tracing::warn;

/// One airflow snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum WindFrame {
    /// No air movement anywhere.
    Calm,
    /// The same wind vector in every cell, in m/s.
    Uniform(Vector3),
    /// A per-cell wind field stored in an external file.
    Snapshot(PathBuf),
}

/// Ordered wind frames plus the index of the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct WindSequence {
    frames: Vec<WindFrame>,
    current: usize,
    loop_config: LoopConfig,
}

impl WindSequence {
    /// Build a sequence starting at frame 0.
    ///
    /// An empty frame list is replaced by a single calm frame. An invalid
    /// loop window disables looping.
    pub fn new(frames: Vec<WindFrame>, loop_config: LoopConfig) -> Self {
        let frames = if frames.is_empty() {
            warn!("No wind data provided, using a single calm frame");
            vec![WindFrame::Calm]
        } else {
            frames
        };

        let mut sequence = Self {
            frames,
            current: 0,
            loop_config: LoopConfig::default(),
        };
        sequence.set_loop_config(loop_config);
        sequence
    }

    /// Replace the loop window, disabling looping if it does not fit.
    pub fn set_loop_config(&mut self, loop_config: LoopConfig) {
        let mut loop_config = loop_config;
        if loop_config.enabled && !loop_config.is_valid_for(self.frames.len()) {
            warn!(
                from = loop_config.from,
                to = loop_config.to,
                num_frames = self.frames.len(),
                "Incorrect loop configuration for wind sequence, forcing loop=false"
            );
            loop_config.enabled = false;
        }
        self.loop_config = loop_config;
    }

    pub fn loop_config(&self) -> LoopConfig {
        self.loop_config
    }

    /// Move to the next frame.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Move forward `steps` frames, following the same wrap and clamp rules
    /// as repeated [`advance`](Self::advance) calls, in constant time.
    pub fn advance_by(&mut self, steps: usize) {
        if steps == 0 {
            return;
        }
        if !self.loop_config.enabled {
            self.current = self
                .current
                .saturating_add(steps)
                .min(self.frames.len() - 1);
            return;
        }

        let LoopConfig { from, to, .. } = self.loop_config;
        let window = to - from + 1;
        let mut remaining = steps;
        if self.current <= to {
            let until_wrap = to - self.current;
            if remaining <= until_wrap {
                self.current += remaining;
                return;
            }
            remaining -= until_wrap + 1;
        } else {
            remaining -= 1;
        }
        self.current = from + remaining % window;
    }

    /// Return to the first frame.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Jump to a specific frame.
    pub fn set_current_index(&mut self, index: usize) -> Result<(), WindError> {
        if index >= self.frames.len() {
            return Err(WindError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &WindFrame {
        &self.frames[self.current]
    }

    pub fn frames(&self) -> &[WindFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a sequence holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn uniform_frames(n: usize) -> Vec<WindFrame> {
        (0..n)
            .map(|i| WindFrame::Uniform(Vector3::new(i as f64, 0.0, 0.0)))
            .collect()
    }

    #[test]
    #[traced_test]
    fn test_empty_becomes_calm() {
        let seq = WindSequence::new(Vec::new(), LoopConfig::default());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.current(), &WindFrame::Calm);
        assert!(logs_contain("single calm frame"));
    }

    #[test]
    fn test_advance_clamps_at_last_frame() {
        let mut seq = WindSequence::new(uniform_frames(3), LoopConfig::default());
        for _ in 0..10 {
            seq.advance();
        }
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_advance_loops_over_window() {
        let mut seq = WindSequence::new(uniform_frames(6), LoopConfig::between(2, 4));
        let visited: Vec<usize> = (0..8)
            .map(|_| {
                seq.advance();
                seq.current_index()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 3, 4, 2, 3, 4, 2]);
    }

    #[test]
    fn test_advance_by_matches_repeated_advance() {
        let configs = [
            LoopConfig::default(),
            LoopConfig::between(2, 4),
            LoopConfig::between(0, 5),
            LoopConfig::between(3, 3),
        ];
        for loop_config in configs {
            for start in 0..6 {
                for steps in 0..20 {
                    let mut stepped = WindSequence::new(uniform_frames(6), loop_config);
                    stepped.set_current_index(start).unwrap();
                    let mut jumped = stepped.clone();

                    for _ in 0..steps {
                        stepped.advance();
                    }
                    jumped.advance_by(steps);
                    assert_eq!(
                        jumped.current_index(),
                        stepped.current_index(),
                        "loop {loop_config:?}, start {start}, steps {steps}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_advance_by_huge_count() {
        let mut seq = WindSequence::new(uniform_frames(4), LoopConfig::default());
        seq.advance_by(usize::MAX);
        assert_eq!(seq.current_index(), 3);

        let mut seq = WindSequence::new(uniform_frames(6), LoopConfig::between(2, 4));
        seq.advance_by(usize::MAX);
        assert!((2..=4).contains(&seq.current_index()));
    }

    #[test]
    fn test_reset_returns_to_first_frame() {
        let mut seq = WindSequence::new(uniform_frames(3), LoopConfig::default());
        seq.advance_by(2);
        seq.reset();
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    #[traced_test]
    fn test_invalid_loop_window_disabled() {
        let seq = WindSequence::new(uniform_frames(3), LoopConfig::between(1, 3));
        assert!(!seq.loop_config().enabled);
        assert!(logs_contain("forcing loop=false"));

        let seq = WindSequence::new(uniform_frames(3), LoopConfig::between(2, 1));
        assert!(!seq.loop_config().enabled);
    }

    #[test]
    fn test_set_current_index() {
        let mut seq = WindSequence::new(uniform_frames(3), LoopConfig::default());
        assert_eq!(seq.set_current_index(2), Ok(()));
        assert_eq!(seq.current(), &WindFrame::Uniform(Vector3::new(2.0, 0.0, 0.0)));
        assert_eq!(
            seq.set_current_index(3),
            Err(WindError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(seq.current_index(), 2);
    }
}
