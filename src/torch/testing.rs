use std::path::Path;
use tch::{CModule, Device, Kind, Tensor};

/// Traces `y = (2x - 1)[:, :action_dim]` and saves it as TorchScript.
pub(crate) fn save_test_model(path: &Path, obs_dim: i64, action_dim: i64) {
    let example = Tensor::zeros([1, obs_dim], (Kind::Float, Device::Cpu));
    let module = CModule::create_by_tracing("TestPolicy", "forward", &[example], &mut |xs: &[Tensor]| {
        vec![(&xs[0] * 2.0 - 1.0).narrow(1, 0, action_dim)]
    })
    .unwrap();

    module.save(path).unwrap();
}
