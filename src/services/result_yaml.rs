use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::duration_sample::DurationSample;
use crate::domain::simulation_request::SimulationRequest;
use crate::domain::simulation_result::SimulationResult;

#[derive(Error, Debug)]
pub enum ResultYamlError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse yaml in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize yaml: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub fn load_histogram<P: AsRef<Path>>(path: P) -> Result<Vec<DurationSample>, ResultYamlError> {
    load_yaml(path.as_ref())
}

pub fn load_simulation_result<P: AsRef<Path>>(path: P) -> Result<SimulationResult, ResultYamlError> {
    load_yaml(path.as_ref())
}

pub fn load_simulation_request<P: AsRef<Path>>(path: P) -> Result<SimulationRequest, ResultYamlError> {
    load_yaml(path.as_ref())
}

/// Serializes any record to YAML and writes it to `path`.
pub fn write_yaml<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<(), ResultYamlError> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(value)?;
    std::fs::write(path, yaml).map_err(|source| ResultYamlError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ResultYamlError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ResultYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ResultYamlError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
