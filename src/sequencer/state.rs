// Overture Sequencer - Progress State
//
// Observable progress marker for the sequence. Transitions are monotonic:
// states never go backwards, terminal states are sticky, and cancellation
// jumps straight to Cancelled from any non-terminal state.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Where the sequence currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SequenceState {
    NotStarted = 0,
    AnimatingTrees = 1,
    AnimatingGasStation = 2,
    AnimatingCar = 3,
    Done = 4,
    Cancelled = 5,
}

impl SequenceState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SequenceState::Done | SequenceState::Cancelled)
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => SequenceState::NotStarted,
            1 => SequenceState::AnimatingTrees,
            2 => SequenceState::AnimatingGasStation,
            3 => SequenceState::AnimatingCar,
            4 => SequenceState::Done,
            _ => SequenceState::Cancelled,
        }
    }
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceState::NotStarted => write!(f, "not-started"),
            SequenceState::AnimatingTrees => write!(f, "animating-trees"),
            SequenceState::AnimatingGasStation => write!(f, "animating-gas-station"),
            SequenceState::AnimatingCar => write!(f, "animating-car"),
            SequenceState::Done => write!(f, "done"),
            SequenceState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Shared, cloneable view of the sequence's progress.
///
/// The runner advances it; any number of observers can poll it from any
/// thread. `advance` enforces monotonicity, so a stale writer can never drag
/// the state backwards or out of a terminal state.
#[derive(Clone, Default)]
pub struct StateCell {
    inner: Arc<AtomicU8>,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(SequenceState::NotStarted as u8)),
        }
    }

    /// Current state
    pub fn get(&self) -> SequenceState {
        SequenceState::from_u8(self.inner.load(Ordering::Relaxed))
    }

    /// Move forward to `next`. Returns false if the transition was refused
    /// (already terminal, or `next` is not ahead of the current state).
    pub fn advance(&self, next: SequenceState) -> bool {
        let mut current = self.inner.load(Ordering::Relaxed);
        loop {
            let state = SequenceState::from_u8(current);
            if state.is_terminal() || next as u8 <= current {
                return false;
            }
            match self.inner.compare_exchange_weak(
                current,
                next as u8,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    /// Jump to Cancelled from any non-terminal state. Returns false if the
    /// sequence had already finished or was already cancelled.
    pub fn cancel(&self) -> bool {
        self.advance(SequenceState::Cancelled)
    }
}

impl fmt::Debug for StateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCell").field(&self.get()).finish()
    }
}
