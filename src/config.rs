use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
use tch::Device;
use tracing::debug;

/// Overrides the directory the bundled models are looked up in.
pub const MODEL_DIR_ENV: &str = "TRIFINGER_POLICY_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    #[default]
    Cpu,
    Cuda(usize),
    /// Uses the first CUDA GPU if available, CPU otherwise
    Auto,
}

impl From<DeviceKind> for Device {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Cpu => Device::Cpu,
            DeviceKind::Cuda(index) => Device::Cuda(index),
            DeviceKind::Auto => Device::cuda_if_available(),
        }
    }
}

fn default_model_dir() -> PathBuf {
    env::var_os(MODEL_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("policies"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    /// Directory that relative model file names are resolved against
    pub model_dir: PathBuf,
    /// Device the model is loaded onto and run on
    pub device: DeviceKind,
    /// Intra-op thread count for libtorch, leave unset to keep its default
    pub num_threads: Option<NonZeroUsize>,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            device: DeviceKind::Cpu,
            num_threads: None,
        }
    }
}

impl PolicySettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&toml_str)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn device(&self) -> Device {
        self.device.into()
    }

    /// Applies the process-wide libtorch settings.
    pub(crate) fn apply(&self) -> Result<()> {
        if let Some(num_threads) = self.num_threads {
            let count = i32::try_from(num_threads.get())
                .map_err(|_| Error::ThreadCount(num_threads.get()))?;

            debug!(num_threads = count, "Setting libtorch thread count");
            tch::set_num_threads(count);
        }

        Ok(())
    }
}
