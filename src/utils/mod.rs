use crate::{Error, Result};
use tch::{Device, Kind, Tensor};

/// Builds a `[1, obs_dim]` float tensor on `device` from a flat observation.
pub(crate) fn obs_to_tensor(obs: &[f32], device: Device) -> Result<Tensor> {
    let tensor = Tensor::from_slice(obs)
        .f_to_device(device)
        .map_err(Error::RunInference)?;
    Ok(tensor.unsqueeze(0))
}

/// Takes the first row of a batched model output and copies it back to the host.
pub(crate) fn first_row_to_vec(output: &Tensor) -> Result<Vec<f32>> {
    let row = if output.dim() > 1 {
        output.f_get(0).map_err(Error::RunInference)?
    } else {
        output.shallow_clone()
    };

    let row = row
        .f_to_device(Device::Cpu)
        .and_then(|row| row.detach().f_to_kind(Kind::Float))
        .and_then(|row| row.f_flatten(0, -1))
        .map_err(Error::RunInference)?;
    Vec::<f32>::try_from(row).map_err(Error::RunInference)
}
