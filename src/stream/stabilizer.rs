//! Scroll-and-settle state machine for infinite-scroll pages.
//!
//! `Growing` asks the renderer for one scroll-to-bottom and records the
//! height it reports. Two consecutive equal readings move it to `Stable`,
//! after which the page is captured once. There is no internal step cap: a
//! page that keeps growing is cut off by the renderer's timeout.

use crate::renderer::{RenderError, RenderSession};

/// Where the page is in the settle protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizerState {
    /// Still loading more content; `last` is the previous reading.
    Growing { last: Option<u64> },
    /// Two consecutive readings agreed on this height.
    Stable { height: u64 },
}

/// Tracks scroll readings until the page stops growing.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    state: StabilizerState,
    steps: usize,
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stabilizer {
    /// Fresh machine with no readings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: StabilizerState::Growing { last: None },
            steps: 0,
        }
    }

    /// Feed one height reading. Readings after `Stable` are ignored.
    pub fn observe(&mut self, height: u64) -> StabilizerState {
        if let StabilizerState::Growing { last } = self.state {
            self.steps += 1;
            self.state = if last == Some(height) {
                StabilizerState::Stable { height }
            } else {
                StabilizerState::Growing { last: Some(height) }
            };
        }
        self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StabilizerState {
        self.state
    }

    /// Whether the page has settled.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self.state, StabilizerState::Stable { .. })
    }

    /// Scroll readings taken so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Scroll `session` until the page settles and return the final height.
    ///
    /// # Errors
    ///
    /// Whatever the session reports for a scroll step, typically
    /// [`RenderError::Timeout`] for a page that never stops growing.
    pub fn settle<S: RenderSession + ?Sized>(&mut self, session: &mut S) -> Result<u64, RenderError> {
        loop {
            let height = session.scroll_to_bottom_and_measure()?;
            if let StabilizerState::Stable { height } = self.observe(height) {
                tracing::debug!(height, steps = self.steps, "page stopped growing");
                return Ok(height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_equal_readings_stabilize() {
        let mut stabilizer = Stabilizer::new();

        assert_eq!(stabilizer.observe(500), StabilizerState::Growing { last: Some(500) });
        assert_eq!(stabilizer.observe(900), StabilizerState::Growing { last: Some(900) });
        assert_eq!(stabilizer.observe(900), StabilizerState::Stable { height: 900 });
        assert_eq!(stabilizer.steps(), 3);
    }

    #[test]
    fn test_non_consecutive_repeats_do_not_stabilize() {
        let mut stabilizer = Stabilizer::new();
        for height in [500, 900, 500, 900] {
            stabilizer.observe(height);
        }
        assert!(!stabilizer.is_stable());
    }

    #[test]
    fn test_stable_is_terminal() {
        let mut stabilizer = Stabilizer::new();
        stabilizer.observe(0);
        stabilizer.observe(0);
        assert_eq!(stabilizer.observe(1_000), StabilizerState::Stable { height: 0 });
        assert_eq!(stabilizer.steps(), 2);
    }
}
