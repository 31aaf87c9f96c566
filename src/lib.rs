//! Example policies for the TriFinger offline RL challenge.
//!
//! Each policy loads a pre-trained TorchScript model, feeds it the flattened
//! observation of every control step and clips the model output to the
//! action space.

mod base;
pub mod config;
mod error;
pub mod torch;
mod utils;

pub use base::{BoxSpace, GOAL_ORDER, Policy, PolicyConfig};
pub use config::{DeviceKind, PolicySettings};
pub use error::{Error, Result};
pub use tch;
pub use torch::{CrrTorchLiftPolicy, TorchBasePolicy, TorchLiftPolicy, TorchPushPolicy};
