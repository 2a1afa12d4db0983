//! # Integration Tests
//!
//! End-to-end episode tests against the mock simulator client.
//!
//! Covers:
//! - full reset/step cycles through every pipeline stage
//! - sensor failure propagation to the episode loop
//! - configuration-driven environment construction

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::EnvBlueprint::default();
    }
}

#[cfg(test)]
mod pipeline_tests {
    use bytes::Bytes;
    use contracts::{ImageResponse, LidarPollConfig};
    use perception::{decode_frame, to_planar, LidarPipeline};

    /// The projection feeding the environment is the same function exposed
    /// by the perception crate; pin its swap convention here too.
    #[test]
    fn test_projection_matches_env_convention() {
        let points = to_planar(&[3.0, 7.0, 1.0]);
        assert_eq!(points.len(), 1);
        assert_eq!((points[0].x, points[0].y), (7.0, 3.0));
    }

    #[test]
    fn test_pipeline_composes_with_decode() {
        let pipeline = LidarPipeline::new(LidarPollConfig::default());
        let planar = pipeline
            .acquire(|| Ok(contracts::LidarData::new(vec![1.0, 2.0, 3.0])))
            .unwrap();
        assert_eq!(planar.len(), 1);

        let frame = decode_frame(
            "front_center",
            ImageResponse {
                height: 2,
                width: 2,
                data: Bytes::from(vec![0u8; 12]),
            },
        )
        .unwrap();
        assert_eq!(frame.channels, 3);
    }
}

#[cfg(test)]
mod observability_tests {
    use contracts::{Observation, SteeringCommand};

    /// Metric helpers must be safe to call with no recorder installed
    /// (they no-op), so library users can skip observability entirely.
    #[test]
    fn test_recorders_are_optional() {
        observability::record_step(0.0, false);
        observability::record_episode_reset();
        observability::record_observation(&Observation {
            lidar_points: Vec::new(),
            steer: SteeringCommand::zeroed(),
            images: Vec::new(),
        });
    }

    #[test]
    fn test_default_observability_config() {
        let config = observability::ObservabilityConfig::default();
        assert_eq!(config.metrics_port, Some(9000));
    }
}

#[cfg(test)]
mod e2e_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{Action, EnvBlueprint, EnvError, LidarPollConfig};
    use gym_env::{Env, F110Env};
    use sim_client::{MockConfig, MockSimClient};

    /// Settle-free blueprint so episodes run without real sleeps
    fn fast_blueprint() -> EnvBlueprint {
        EnvBlueprint::without_settles()
    }

    /// End-to-end: reset -> step over the mock simulator.
    ///
    /// Exercises the full chain: actuator dispatch, camera fetch + decode,
    /// bounded LiDAR poll, planar projection, history update, policy
    /// evaluation.
    #[test]
    fn test_e2e_reset_then_step() {
        let client = MockSimClient::with_lidar_points(&[
            [1.0, 0.0, 0.2],
            [0.0, 2.0, 0.2],
            [-3.0, 0.0, 0.2],
            [0.0, -4.0, 0.2],
        ]);
        let mut env = F110Env::connect(client, fast_blueprint()).unwrap();

        let first = env.reset().unwrap();
        // one planar point per mocked LiDAR point
        assert_eq!(first.lidar_points.len(), 4);
        // default single-viewpoint configuration yields exactly one frame
        assert_eq!(first.images.len(), 1);

        let result = env.step(Action::new(0.0, 0.0)).unwrap();
        assert_eq!(result.observation.lidar_points.len(), 4);
        assert_eq!(result.observation.images.len(), 1);
        assert_eq!(result.reward, 0.0);
        assert!(!result.done);

        // axis swap, not identity: raw (0, 2, _) lands at planar (2, 0)
        assert_eq!(result.observation.lidar_points[1].x, 2.0);
        assert_eq!(result.observation.lidar_points[1].y, 0.0);

        // the mock journaled exactly one actuator dispatch and one reset
        assert_eq!(env.client().controls_log().len(), 1);
        assert_eq!(env.client().reset_count(), 1);
    }

    #[test]
    fn test_e2e_multi_step_episode() {
        let mut env = F110Env::connect(MockSimClient::new(), fast_blueprint()).unwrap();
        env.reset().unwrap();

        for i in 0..10 {
            let result = env.step(Action::new(0.01 * i as f64, 0.5)).unwrap();
            assert!(!result.done, "stub termination must never end the episode");
        }
        assert_eq!(env.client().controls_log().len(), 10);
        // every step maps speed -> throttle unchanged
        assert!(env.client().controls_log().iter().all(|c| c.throttle == 0.5));
    }

    #[test]
    fn test_e2e_lidar_warmup_within_bound() {
        let client = MockSimClient::with_config(MockConfig {
            empty_lidar_polls: 5,
            ..MockConfig::default()
        });
        let mut env = F110Env::connect(client, fast_blueprint()).unwrap();

        let obs = env.reset().unwrap();
        assert_eq!(obs.lidar_points.len(), 4);
        assert_eq!(env.client().lidar_polls(), 6);
    }

    #[test]
    fn test_e2e_sensor_timeout_surfaces_and_recovers() {
        let mut blueprint = fast_blueprint();
        blueprint.lidar = LidarPollConfig {
            max_attempts: 3,
            ..LidarPollConfig::default()
        };
        let client = MockSimClient::with_config(MockConfig {
            empty_lidar_polls: 3,
            ..MockConfig::default()
        });
        let mut env = F110Env::connect(client, blueprint).unwrap();

        let err = env.reset().unwrap_err();
        assert!(matches!(err, EnvError::SensorTimeout { attempts: 3, .. }));

        // recoverable: the caller re-invokes and the episode proceeds
        let result = env.step(Action::new(0.0, 0.0)).unwrap();
        assert_eq!(result.observation.lidar_points.len(), 4);
    }

    #[test]
    fn test_e2e_malformed_image_fails_step() {
        let client = MockSimClient::with_config(MockConfig {
            image_height: 2,
            image_width: 2,
            image_bytes_override: Some(11),
            ..MockConfig::default()
        });
        let mut env = F110Env::connect(client, fast_blueprint()).unwrap();

        let err = env.step(Action::new(0.0, 0.0)).unwrap_err();
        assert!(
            matches!(err, EnvError::ObservationUnavailable { .. }),
            "partial observations must never be returned, got: {err}"
        );
    }

    #[test]
    fn test_e2e_config_driven_construction() {
        let toml = r#"
camera_labels = ["front_center", "back_center"]
history_capacity = 100
reset_settle_sec = 0.0
step_settle_sec = 0.0

[lidar]
max_attempts = 10
"#;
        let blueprint = ConfigLoader::load_from_str(toml, ConfigFormat::Toml).unwrap();
        let mut env = F110Env::connect(MockSimClient::new(), blueprint).unwrap();

        let obs = env.reset().unwrap();
        assert_eq!(obs.images.len(), 2);
        assert_eq!(env.history().capacity(), 100);
        assert_eq!(
            env.client().image_requests_log()[0],
            vec!["front_center".to_string(), "back_center".to_string()]
        );
    }

    #[test]
    fn test_e2e_steer_placeholder_is_zeroed() {
        let mut env = F110Env::connect(MockSimClient::new(), fast_blueprint()).unwrap();
        let obs = env.reset().unwrap();
        assert_eq!(obs.steer.angle, 0.0);
        assert_eq!(obs.steer.steering_angle_velocity, 0.0);
        assert_eq!(obs.steer.speed, 0.0);
        // and the zeroed placeholder never populates the history
        assert!(env.history().is_empty());
    }
}
