use super::{TorchBasePolicy, resolve_model_path};
use crate::{
    Result,
    base::{BoxSpace, Policy, PolicyConfig},
    config::PolicySettings,
};
use std::ops::Deref;

macro_rules! torch_task_policies {
    ($($(#[$meta:meta])* $name:ident => $model_file:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name {
                inner: TorchBasePolicy,
            }

            impl $name {
                pub const MODEL_FILE: &'static str = $model_file;

                pub fn new(
                    action_space: BoxSpace,
                    observation_space: BoxSpace,
                    episode_length: usize,
                ) -> Result<Self> {
                    Self::with_settings(
                        &PolicySettings::default(),
                        action_space,
                        observation_space,
                        episode_length,
                    )
                }

                pub fn with_settings(
                    settings: &PolicySettings,
                    action_space: BoxSpace,
                    observation_space: BoxSpace,
                    episode_length: usize,
                ) -> Result<Self> {
                    let model_path = resolve_model_path(&settings.model_dir, Self::MODEL_FILE);
                    let inner = TorchBasePolicy::with_settings(
                        model_path,
                        settings,
                        action_space,
                        observation_space,
                        episode_length,
                    )?;

                    Ok(Self { inner })
                }
            }

            impl Deref for $name {
                type Target = TorchBasePolicy;

                fn deref(&self) -> &Self::Target {
                    &self.inner
                }
            }

            impl Policy for $name {
                fn policy_config() -> PolicyConfig {
                    TorchBasePolicy::policy_config()
                }

                fn reset(&mut self) {
                    self.inner.reset();
                }

                fn get_action(&mut self, observation: &[f32]) -> Result<Vec<f32>> {
                    self.inner.get_action(observation)
                }
            }
        )*
    };
}

torch_task_policies!(
    /// Policy for the push task.
    ///
    /// Expects flattened observations.
    TorchPushPolicy => "push.pt",
    /// Policy for the lift task.
    ///
    /// Expects flattened observations.
    TorchLiftPolicy => "lift.pt",
    /// CRR policy for the lift task, loaded from outside the bundled models.
    ///
    /// Expects flattened observations.
    CrrTorchLiftPolicy => "/userhome/crr_old_data.pt",
);
