use crate::Result;

/// Order in which the framework flattens the goal entries of an observation.
///
/// Consumed by the framework when it builds flat observations; policies only
/// rely on it.
pub const GOAL_ORDER: [&str; 3] = ["object_keypoints", "object_position", "object_orientation"];

/// Tells the framework how observations should be handed to a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Observations arrive as one flat vector instead of a nested mapping
    pub flatten_obs: bool,
    /// Camera images are included in the observation
    pub image_obs: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            flatten_obs: true,
            image_obs: false,
        }
    }
}

/// A policy maps the observation of every control step to an action.
pub trait Policy {
    fn policy_config() -> PolicyConfig
    where
        Self: Sized;

    /// Called at the start of every episode.
    fn reset(&mut self);

    fn get_action(&mut self, observation: &[f32]) -> Result<Vec<f32>>;
}
