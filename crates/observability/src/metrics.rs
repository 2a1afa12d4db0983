//! Episode metric helpers
//!
//! Thin wrappers over the `metrics` macros so call sites stay one-liners.
//! The environment core records its own low-level series (poll retries,
//! observation latency, history depth); these helpers cover the episode
//! loop driven by the caller.

use contracts::Observation;
use metrics::{counter, gauge, histogram};

/// Record one completed step
///
/// ```ignore
/// let result = env.step(action)?;
/// observability::record_step(result.reward, result.done);
/// ```
pub fn record_step(reward: f64, done: bool) {
    counter!("f110_env_agent_steps_total").increment(1);
    histogram!("f110_env_reward").record(reward);
    if done {
        counter!("f110_env_episodes_finished_total").increment(1);
    }
}

/// Record one episode reset
pub fn record_episode_reset() {
    counter!("f110_env_episode_resets_total").increment(1);
}

/// Record the shape of an assembled observation
pub fn record_observation(observation: &Observation) {
    gauge!("f110_env_lidar_points").set(observation.lidar_points.len() as f64);
    gauge!("f110_env_image_frames").set(observation.images.len() as f64);
}
