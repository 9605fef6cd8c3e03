//! Backup plan discovery
//!

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use walkdir::WalkDir;

use crate::Plan;

/// Tries to load every backup plan under `directory`.
///
/// A path is a plan file if it contains `yml` or `yaml` anywhere in its
/// string representation, so `nightly.yml.bak` matches while `notes.txt`
/// does not. Any read or parse failure aborts the whole load.
pub fn load_plans(directory: &Path) -> Result<Vec<Plan>, LoadPlansError> {
    let mut plans = Vec::new();

    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry =
            entry.map_err(|error| LoadPlansError::Walk(directory.to_path_buf(), error))?;
        let path = entry.path();

        if !is_plan_path(path) {
            continue;
        }

        let contents = fs::read_to_string(path)
            .map_err(|error| LoadPlansError::ReadFile(path.to_path_buf(), error))?;

        let mut plan: Plan = serde_yaml::from_str(&contents)
            .map_err(|error| LoadPlansError::Parse(path.to_path_buf(), error))?;

        // The file name always wins over a `name` key in the document.
        plan.name = plan_name(path);

        plans.push(plan);
    }

    if plans.is_empty() {
        return Err(LoadPlansError::NoPlans(directory.to_path_buf()));
    }

    Ok(plans)
}

/// Substring containment, not extension parsing.
fn is_plan_path(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.contains("yml") || path.contains("yaml")
}

/// The plan's file name with the final extension removed.
fn plan_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoadPlansError {
    #[error("Failed to walk plan directory {0:?}: {1}")]
    Walk(PathBuf, #[source] walkdir::Error),

    #[error("Failed to read plan file {0:?}: {1}")]
    ReadFile(PathBuf, #[source] io::Error),

    #[error("Failed to parse plan file {0:?}: {1}")]
    Parse(PathBuf, #[source] serde_yaml::Error),

    #[error("No backup plans found in {0:?}")]
    NoPlans(PathBuf),
}
