//! Animation pacing for a running search.

use std::thread;
use std::time::Duration;

use gridpath_paths::{NodeId, Search};

/// Animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Pause after each visited node.
    pub delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

/// Drives a [`Search`] one visit at a time, pausing between visits.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    pub config: AnimationConfig,
}

impl Animator {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// Run `search` to completion.
    ///
    /// `on_visit` is called with the paused search and the node it just
    /// finalized; the animator then sleeps for the configured delay before
    /// resuming. Returns the final path.
    pub fn run<N, F>(&self, mut search: Search<'_, N>, mut on_visit: F) -> Vec<N>
    where
        N: NodeId,
        F: FnMut(&Search<'_, N>, &N),
    {
        while let Some(node) = search.next() {
            on_visit(&search, node);
            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }
        log::debug!("animation finished after {} steps", search.visit_count());
        search.path()
    }
}
