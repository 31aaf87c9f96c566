//! Policies backed by TorchScript models.

mod model;
mod tasks;
#[cfg(test)]
mod testing;

pub use model::{load_module, resolve_model_path};
pub use tasks::{CrrTorchLiftPolicy, TorchLiftPolicy, TorchPushPolicy};

use crate::{
    Error, Result,
    base::{BoxSpace, Policy, PolicyConfig},
    config::PolicySettings,
    utils::{first_row_to_vec, obs_to_tensor},
};
use std::path::Path;
use tch::{CModule, Device};
use tracing::trace;

/// Runs a TorchScript model on flattened observations and clips its output
/// to the action space.
///
/// The framework flattens goal entries in [`GOAL_ORDER`](crate::GOAL_ORDER)
/// before handing the observation over, so the model sees them in that order.
pub struct TorchBasePolicy {
    module: CModule,
    device: Device,
    action_space: BoxSpace,
    observation_space: BoxSpace,
    episode_length: usize,
}

impl TorchBasePolicy {
    /// Loads the model on the CPU.
    pub fn new<P: AsRef<Path>>(
        model_path: P,
        action_space: BoxSpace,
        observation_space: BoxSpace,
        episode_length: usize,
    ) -> Result<Self> {
        Self::with_settings(
            model_path,
            &PolicySettings::default(),
            action_space,
            observation_space,
            episode_length,
        )
    }

    pub fn with_settings<P: AsRef<Path>>(
        model_path: P,
        settings: &PolicySettings,
        action_space: BoxSpace,
        observation_space: BoxSpace,
        episode_length: usize,
    ) -> Result<Self> {
        settings.apply()?;

        let device = settings.device();
        let module = load_module(model_path, device)?;

        Ok(Self::from_module(
            module,
            device,
            action_space,
            observation_space,
            episode_length,
        ))
    }

    /// Wraps a module that was already loaded onto `device`.
    pub fn from_module(
        module: CModule,
        device: Device,
        action_space: BoxSpace,
        observation_space: BoxSpace,
        episode_length: usize,
    ) -> Self {
        Self {
            module,
            device,
            action_space,
            observation_space,
            episode_length,
        }
    }

    pub fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    pub fn episode_length(&self) -> usize {
        self.episode_length
    }

    pub fn device(&self) -> Device {
        self.device
    }

    fn infer(&self, observation: &[f32]) -> Result<Vec<f32>> {
        let expected = self.observation_space.dim();
        if observation.len() != expected {
            return Err(Error::ObservationShape {
                expected,
                actual: observation.len(),
            });
        }

        let input = obs_to_tensor(observation, self.device)?;
        let output = tch::no_grad(|| self.module.forward_ts(&[input])).map_err(Error::RunInference)?;

        let mut action = first_row_to_vec(&output)?;
        self.action_space.clip(&mut action)?;

        trace!(?action, "Computed action");

        Ok(action)
    }
}

impl Policy for TorchBasePolicy {
    fn policy_config() -> PolicyConfig {
        PolicyConfig::default()
    }

    fn reset(&mut self) {}

    fn get_action(&mut self, observation: &[f32]) -> Result<Vec<f32>> {
        self.infer(observation)
    }
}
