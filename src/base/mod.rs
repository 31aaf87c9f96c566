mod policy;
mod space;

pub use policy::{GOAL_ORDER, Policy, PolicyConfig};
pub use space::BoxSpace;
