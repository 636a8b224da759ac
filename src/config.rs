//! Run configuration
//!
//! Collects what one generate/delete run needs and checks it before any
//! worker is started.

use std::path::PathBuf;

use crate::lod::{validate_lod_sizes, LodPlan, ValidationError};
use crate::worker::Job;

/// Which operation to run
#[derive(Debug, Clone)]
pub enum Operation {
    /// Generate LODs with the given plan
    Generate(LodPlan),
    /// Remove previously generated LODs
    Delete,
}

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Folder holding the PNG textures
    pub folder: PathBuf,

    /// Operation to perform
    pub operation: Operation,
}

impl RunConfig {
    /// Generate with the fixed four-level preset
    pub fn fixed(folder: PathBuf) -> Self {
        Self {
            folder,
            operation: Operation::Generate(LodPlan::fixed()),
        }
    }

    /// Generate with user-selected sizes, validated up front
    pub fn configurable<S: AsRef<str>>(
        folder: PathBuf,
        lod_count: usize,
        selections: &[S],
        include_normals: bool,
    ) -> Result<Self, ConfigError> {
        let sizes = validate_lod_sizes(lod_count, selections)?;
        Ok(Self {
            folder,
            operation: Operation::Generate(LodPlan::configurable(sizes, include_normals)),
        })
    }

    /// Remove generated LODs
    pub fn delete(folder: PathBuf) -> Self {
        Self {
            folder,
            operation: Operation::Delete,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.folder.exists() {
            return Err(ConfigError::FolderNotFound(self.folder.clone()));
        }

        if !self.folder.is_dir() {
            return Err(ConfigError::NotAFolder(self.folder.clone()));
        }

        Ok(())
    }

    /// Validate and turn into a worker job
    pub fn into_job(self) -> Result<Job, ConfigError> {
        self.validate()?;
        Ok(match self.operation {
            Operation::Generate(plan) => Job::Generate {
                folder: self.folder,
                plan,
            },
            Operation::Delete => Job::Delete {
                folder: self.folder,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Selected folder does not exist: {0}")]
    FolderNotFound(PathBuf),

    #[error("Selected path is not a folder: {0}")]
    NotAFolder(PathBuf),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
