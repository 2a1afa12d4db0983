//! Bounded steering-command history
//!
//! Rolling log of recent steering commands backing the reverse-on-dead-end
//! recovery heuristic. Fixed capacity with FIFO eviction; never cleared for
//! the lifetime of the environment instance, so it spans reset boundaries.

use contracts::{LockPredicate, SteerLockConfig, SteeringCommand};
use metrics::gauge;
use ringbuf::{traits::*, HeapRb};
use tracing::trace;

/// Bounded FIFO of steering commands.
///
/// Oldest entries are silently dropped once capacity is exceeded. Commands
/// enter through [`record_if_locked`](Self::record_if_locked), which applies
/// the configured steering-lock predicate and amplification.
pub struct SteerHistory {
    buffer: HeapRb<SteeringCommand>,
    lock: SteerLockConfig,
    evicted_count: u64,
}

impl std::fmt::Debug for SteerHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteerHistory")
            .field("len", &self.buffer.occupied_len())
            .field("capacity", &self.buffer.capacity().get())
            .field("evicted", &self.evicted_count)
            .finish()
    }
}

impl SteerHistory {
    /// Create an empty history with the given capacity
    pub fn new(capacity: usize, lock: SteerLockConfig) -> Self {
        Self {
            buffer: HeapRb::new(capacity),
            lock,
            evicted_count: 0,
        }
    }

    /// Append one command, evicting the oldest entry when full
    pub fn push(&mut self, cmd: SteeringCommand) {
        if self.buffer.is_full() {
            let _ = self.buffer.try_pop();
            self.evicted_count += 1;
        }
        let _ = self.buffer.try_push(cmd);
        gauge!("f110_env_steer_history_len").set(self.buffer.occupied_len() as f64);
    }

    /// Record a command only if the steering-lock predicate fires, appending
    /// `amplification` copies to weight it for the reverse maneuver.
    ///
    /// Returns whether the command was recorded.
    pub fn record_if_locked(&mut self, cmd: &SteeringCommand) -> bool {
        if !self.is_locked(cmd.angle) {
            return false;
        }
        for _ in 0..self.lock.amplification {
            self.push(*cmd);
        }
        trace!(
            angle = cmd.angle,
            copies = self.lock.amplification,
            "steering lock recorded"
        );
        true
    }

    /// Evaluate the configured lock predicate against a steering angle.
    ///
    /// `Literal` preserves the reference check `|a| > t && a < -t`, which
    /// collapses to `a < -t`: only a left lock past the threshold records,
    /// a right lock of any magnitude never does. `Magnitude` is the
    /// inferred symmetric check, opt-in via configuration.
    fn is_locked(&self, angle: f64) -> bool {
        let t = self.lock.threshold;
        match self.lock.predicate {
            LockPredicate::Literal => angle.abs() > t && angle < -t,
            LockPredicate::Magnitude => angle.abs() > t,
        }
    }

    /// Number of commands currently held
    pub fn len(&self) -> usize {
        self.buffer.occupied_len()
    }

    /// Whether the history holds no commands
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Fixed capacity
    pub fn capacity(&self) -> usize {
        self.buffer.capacity().get()
    }

    /// Commands evicted since construction
    pub fn evicted_count(&self) -> u64 {
        self.evicted_count
    }

    /// Oldest retained command
    pub fn oldest(&self) -> Option<&SteeringCommand> {
        self.buffer.iter().next()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &SteeringCommand> {
        self.buffer.iter()
    }
}
