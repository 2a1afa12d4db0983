//! # Gym Env
//!
//! The environment core: step/reset loop over a simulator client handle,
//! observation assembly, bounded steering history, and pluggable
//! reward/termination policies.
//!
//! ## Control Flow
//!
//! `step`: action -> actuator dispatch -> settle sleep -> observation
//! assembly (camera fetch, LiDAR poll + projection, history update) ->
//! reward/termination policies -> `StepResult`.
//!
//! `reset`: simulator-level reset -> settle sleep -> observation assembly.
//!
//! Single-threaded and blocking throughout: one exclusive client handle,
//! settle waits are real sleeps, and no call suspends except the bounded
//! LiDAR poll loop.

mod env;
mod history;
mod observe;
mod policy;

pub use env::{Env, F110Env};
pub use history::SteerHistory;
pub use observe::ObservationAssembler;
pub use policy::{ConstantReward, NeverTooClose, RewardPolicy, TerminationPolicy};
