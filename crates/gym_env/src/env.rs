//! Action dispatch and episode control
//!
//! The public environment surface: reset/step over an exclusively owned
//! simulator client handle, with real-time settle sleeps matching the
//! simulator's tick assumptions.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use contracts::{
    Action, ActionKind, CarControls, EnvBlueprint, EnvError, Observation, ObservationKind, Result,
    StepResult,
};
use metrics::counter;
use sim_client::SimClient;
use tracing::{debug, instrument};

use crate::history::SteerHistory;
use crate::observe::ObservationAssembler;
use crate::policy::{ConstantReward, NeverTooClose, RewardPolicy, TerminationPolicy};

/// Gym-style environment surface
pub trait Env {
    /// Reset the simulation to its initial state and return the first
    /// observation of the new episode
    fn reset(&mut self) -> Result<Observation>;

    /// Run one timestep of the environment's dynamics
    fn step(&mut self, action: Action) -> Result<StepResult>;

    /// Serialize the latest observation for multi-part transmission.
    ///
    /// No wire format has been chosen; implementations without one must
    /// return `NotImplemented` rather than guessing.
    fn serialize_obs(&self) -> Result<Vec<Bytes>>;

    /// Observation channels this environment exposes
    fn observation_space(&self) -> &[ObservationKind];

    /// Action fields this environment accepts
    fn action_space(&self) -> &[ActionKind];
}

/// Simulated race car environment over a [`SimClient`] handle.
///
/// Owns the client exclusively; step/reset take `&mut self` and are strictly
/// sequential. Multi-threaded use requires external mutual exclusion around
/// the whole environment.
pub struct F110Env<C: SimClient> {
    client: C,
    blueprint: EnvBlueprint,
    assembler: ObservationAssembler,
    history: SteerHistory,
    reward: Box<dyn RewardPolicy>,
    termination: Box<dyn TerminationPolicy>,
    reset_settle: Duration,
    step_settle: Duration,
}

impl<C: SimClient> std::fmt::Debug for F110Env<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("F110Env")
            .field("blueprint", &self.blueprint)
            .field("reset_settle", &self.reset_settle)
            .field("step_settle", &self.step_settle)
            .finish_non_exhaustive()
    }
}

impl<C: SimClient> F110Env<C> {
    /// Connect to the simulator and build the environment.
    ///
    /// Confirms the connection and arms API control; a failure in either is
    /// fatal (`ConnectionFailure`), with no retry. Uses the stub policies
    /// (constant 0 reward, never done).
    pub fn connect(client: C, blueprint: EnvBlueprint) -> Result<Self> {
        Self::with_policies(
            client,
            blueprint,
            Box::new(ConstantReward(0.0)),
            Box::new(NeverTooClose),
        )
    }

    /// Connect with explicit reward and termination policies
    pub fn with_policies(
        mut client: C,
        blueprint: EnvBlueprint,
        reward: Box<dyn RewardPolicy>,
        termination: Box<dyn TerminationPolicy>,
    ) -> Result<Self> {
        client
            .confirm_connection()
            .map_err(|e| EnvError::connection(e.to_string()))?;
        client
            .enable_api_control(true)
            .map_err(|e| EnvError::connection(e.to_string()))?;

        let reset_settle = Duration::try_from_secs_f64(blueprint.reset_settle_sec)
            .map_err(|e| EnvError::config_validation("reset_settle_sec", e.to_string()))?;
        let step_settle = Duration::try_from_secs_f64(blueprint.step_settle_sec)
            .map_err(|e| EnvError::config_validation("step_settle_sec", e.to_string()))?;

        debug!(
            history_capacity = blueprint.history_capacity,
            cameras = blueprint.camera_labels.len(),
            "environment connected"
        );

        Ok(Self {
            assembler: ObservationAssembler::new(&blueprint),
            history: SteerHistory::new(blueprint.history_capacity, blueprint.steer_lock.clone()),
            reward,
            termination,
            reset_settle,
            step_settle,
            client,
            blueprint,
        })
    }

    /// Steering history, persistent across reset/step for the lifetime of
    /// this instance
    pub fn history(&self) -> &SteerHistory {
        &self.history
    }

    /// The underlying client handle
    pub fn client(&self) -> &C {
        &self.client
    }

    fn observe(&mut self) -> Result<Observation> {
        self.assembler.observe(&mut self.client, &mut self.history)
    }

    fn settle(duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

impl<C: SimClient> Env for F110Env<C> {
    #[instrument(name = "env_reset", skip(self))]
    fn reset(&mut self) -> Result<Observation> {
        self.client.reset()?;
        Self::settle(self.reset_settle);
        counter!("f110_env_resets_total").increment(1);
        self.observe()
    }

    #[instrument(name = "env_step", skip(self), fields(angle = action.angle, speed = action.speed))]
    fn step(&mut self, action: Action) -> Result<StepResult> {
        // one immutable actuator value per step, nothing shared across calls
        let controls = CarControls::from(action);
        self.client.set_car_controls(&controls)?;
        Self::settle(self.step_settle);

        let observation = self.observe()?;
        let reward = self.reward.reward(&observation);
        let done = self.termination.is_done(&observation);
        counter!("f110_env_steps_total").increment(1);

        Ok(StepResult {
            observation,
            reward,
            done,
            info: HashMap::new(),
        })
    }

    fn serialize_obs(&self) -> Result<Vec<Bytes>> {
        Err(EnvError::not_implemented(
            "serialize_obs: no multi-part wire format chosen",
        ))
    }

    fn observation_space(&self) -> &[ObservationKind] {
        &self.blueprint.observation_space
    }

    fn action_space(&self) -> &[ActionKind] {
        &self.blueprint.action_space
    }
}
