//! Spin state
//!
//! The single source of truth for the wheel's rotation. Owned by the
//! controller; everyone else reads snapshots.

use serde::{Deserialize, Serialize};

/// Current phase of the spin lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinPhase {
    /// Armed, waiting for a spin request
    #[default]
    Idle,
    /// Animation in flight
    Spinning,
    /// Animation finished and a winner was resolved
    Settled,
}

/// Rotation state for the current spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpinState {
    pub phase: SpinPhase,
    /// Live rotation (degrees, signed, not normalized during flight)
    pub angle: f64,
    /// Target rotation of the in-flight or last spin
    pub target: Option<f64>,
    /// Winner the target was computed for
    pub requested: Option<usize>,
    /// Winner resolved from the final angle
    pub winner: Option<usize>,
    /// Identifies the current spin; bumped on every start and cancel
    pub generation: u64,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Enter `Spinning` from angle 0
    pub fn begin(&mut self, requested: usize, target: f64) -> u64 {
        self.generation += 1;
        self.phase = SpinPhase::Spinning;
        self.angle = 0.0;
        self.target = Some(target);
        self.requested = Some(requested);
        self.winner = None;
        self.generation
    }

    pub fn settle(&mut self, winner: usize) {
        self.phase = SpinPhase::Settled;
        self.winner = Some(winner);
    }

    /// Invalidate the in-flight spin. The angle stays where it stopped.
    pub fn abort(&mut self) {
        self.generation += 1;
        self.phase = SpinPhase::Idle;
        self.target = None;
        self.requested = None;
    }

    /// Back to a fresh `Idle` at angle 0, keeping the generation counter
    pub fn rearm(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state = SpinState::new();
        assert_eq!(state.phase, SpinPhase::Idle);

        let generation = state.begin(2, 545.0);
        assert_eq!(generation, 1);
        assert!(state.is_spinning());
        assert_eq!(state.angle, 0.0);

        state.angle = 545.0;
        state.settle(2);
        assert_eq!(state.phase, SpinPhase::Settled);
        assert_eq!(state.winner, Some(2));

        state.rearm();
        assert_eq!(state.phase, SpinPhase::Idle);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.winner, None);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_abort_bumps_generation() {
        let mut state = SpinState::new();
        state.begin(0, 365.0);
        state.angle = 100.0;
        state.abort();
        assert_eq!(state.phase, SpinPhase::Idle);
        assert_eq!(state.generation, 2);
        assert_eq!(state.angle, 100.0);
        assert_eq!(state.target, None);
    }
}
