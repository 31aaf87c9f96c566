use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tch::{CModule, Device};
use tracing::info;

/// Resolves a model file name against the model directory.
///
/// An absolute `name` is returned unchanged.
pub fn resolve_model_path<P: AsRef<Path>>(model_dir: P, name: &str) -> PathBuf {
    model_dir.as_ref().join(name)
}

/// Loads a TorchScript module onto `device` and puts it in eval mode.
pub fn load_module<P: AsRef<Path>>(path: P, device: Device) -> Result<CModule> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ModelNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut module = CModule::load_on_device(path, device).map_err(|source| Error::LoadModel {
        path: path.to_path_buf(),
        source,
    })?;
    module.set_eval();

    info!("Loaded model from: {} ({device:?})", path.display());

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::torch::testing::save_test_model;
    use tempfile::tempdir;
    use std::fs;

    #[test]
    fn relative_names_land_in_model_dir() {
        let path = resolve_model_path("/opt/policies", "push.pt");
        assert_eq!(path, Path::new("/opt/policies/push.pt"));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_names_replace_model_dir() {
        let path = resolve_model_path("/opt/policies", "/userhome/crr_old_data.pt");
        assert_eq!(path, Path::new("/userhome/crr_old_data.pt"));
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let err = load_module(dir.path().join("nope.pt"), Device::Cpu).unwrap_err();
        assert!(matches!(err, Error::ModelNotFound { .. }));
    }

    #[test]
    fn corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pt");
        fs::write(&path, b"definitely not torchscript").unwrap();

        let err = load_module(&path, Device::Cpu).unwrap_err();
        assert!(matches!(err, Error::LoadModel { path: p, .. } if p == path));
    }

    #[test]
    fn loads_saved_module() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.pt");
        save_test_model(&path, 3, 3);

        assert!(load_module(&path, Device::Cpu).is_ok());
    }
}
