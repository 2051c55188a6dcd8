// src/core/layout.rs

//! Log and job plan folders derived from the app data directory.

use crate::constants::PLANS_DIR_NAME;
use crate::core::environment::{
    Environment, EnvironmentVariable, JOB_PLAN_LOCATION, LOG_LOCATION, ProcessEnv,
    get_environment_variable,
};
use crate::core::paths::{DirState, display_path, ensure_dir, resolve_app_data_dir_with};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to provide a folder the tool cannot run without.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Neither the app data directory nor `AZCOPY_LOG_LOCATION` is available.
    #[error(
        "No location available for log files. Set the AZCOPY_LOG_LOCATION environment variable."
    )]
    NoLogLocation,
    /// The log folder could not be created.
    #[error(
        "Problem making log directory '{path}'. Try setting the AZCOPY_LOG_LOCATION environment variable. {source}"
    )]
    LogDir {
        /// The folder that was attempted.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// The job plan folder could not be created.
    #[error(
        "Problem making job plan directory '{path}'. Try setting the AZCOPY_JOB_PLAN_LOCATION environment variable. {source}"
    )]
    JobPlanDir {
        /// The folder that was attempted.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

/// Where the tool keeps its files for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageLocations {
    /// The `.azcopy` directory, if it could be provided.
    pub app_dir: Option<PathBuf>,
    /// Folder for job and scanning logs.
    pub log_dir: PathBuf,
    /// Folder for job plan files (progress tracking and resume).
    pub job_plan_dir: PathBuf,
}

/// Resolves and creates the storage folders from the process environment.
pub fn resolve_storage_locations() -> Result<StorageLocations, StorageError> {
    resolve_storage_locations_with(&ProcessEnv)
}

/// Resolves and creates the storage folders, reading overrides from `env`.
///
/// The log folder defaults to the `.azcopy` directory and the job plan folder to
/// `<log folder>/plans`. Either can be moved with `AZCOPY_LOG_LOCATION` and
/// `AZCOPY_JOB_PLAN_LOCATION`; `~` (the user's profile directory) and `$VAR` in
/// those values are expanded.
///
/// # Errors
/// Unlike the app data directory itself, a missing log or plan folder is fatal for
/// the caller, so failures here are returned.
pub fn resolve_storage_locations_with(
    env: &impl Environment,
) -> Result<StorageLocations, StorageError> {
    let app_dir = resolve_app_data_dir_with(env).into_path();

    let log_dir = match override_location(env, &LOG_LOCATION) {
        Some(dir) => dir,
        None => app_dir.clone().ok_or(StorageError::NoLogLocation)?,
    };
    create_location(&log_dir).map_err(|source| StorageError::LogDir {
        path: display_path(&log_dir),
        source,
    })?;

    let job_plan_dir = override_location(env, &JOB_PLAN_LOCATION)
        .unwrap_or_else(|| log_dir.join(PLANS_DIR_NAME));
    create_location(&job_plan_dir).map_err(|source| StorageError::JobPlanDir {
        path: display_path(&job_plan_dir),
        source,
    })?;

    log::debug!(
        "Storage locations: logs at '{}', job plans at '{}'.",
        display_path(&log_dir),
        display_path(&job_plan_dir)
    );

    Ok(StorageLocations {
        app_dir,
        log_dir,
        job_plan_dir,
    })
}

fn override_location(env: &impl Environment, variable: &EnvironmentVariable) -> Option<PathBuf> {
    let raw = get_environment_variable(env, variable);
    if raw.is_empty() {
        return None;
    }

    let expanded = shellexpand::full_with_context_no_errors(
        &raw,
        || env.user_dir().map(|dir| dir.display().to_string()),
        |name| env.var(name),
    );
    Some(PathBuf::from(expanded.into_owned()))
}

fn create_location(path: &Path) -> io::Result<()> {
    match ensure_dir(path)? {
        DirState::Created | DirState::Existing => Ok(()),
        DirState::NotADirectory => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOME_ENV_VAR, USER_DIR_ENV_VAR};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_derive_from_app_dir() {
        let temp = TempDir::new().unwrap();
        let env = HashMap::from([(HOME_ENV_VAR.to_string(), temp.path().display().to_string())]);

        let locations = resolve_storage_locations_with(&env).unwrap();

        let app_dir = temp.path().join(".azcopy");
        assert_eq!(locations.app_dir.as_deref(), Some(app_dir.as_path()));
        assert_eq!(locations.log_dir, app_dir);
        assert_eq!(locations.job_plan_dir, app_dir.join("plans"));
        assert!(locations.job_plan_dir.is_dir());
    }

    #[test]
    fn test_missing_home_without_override_fails() {
        let env = HashMap::<String, String>::new();

        let err = resolve_storage_locations_with(&env).unwrap_err();
        assert!(matches!(err, StorageError::NoLogLocation));
    }

    #[test]
    fn test_log_override_is_expanded_against_env() {
        let temp = TempDir::new().unwrap();
        let env = HashMap::from([
            ("SCRATCH".to_string(), temp.path().display().to_string()),
            (LOG_LOCATION.name.to_string(), "$SCRATCH/logs".to_string()),
        ]);

        let locations = resolve_storage_locations_with(&env).unwrap();

        assert_eq!(locations.app_dir, None);
        assert_eq!(locations.log_dir, temp.path().join("logs"));
        assert_eq!(locations.job_plan_dir, temp.path().join("logs").join("plans"));
    }

    #[test]
    fn test_tilde_override_expands_to_user_dir() {
        let temp = TempDir::new().unwrap();
        let env = HashMap::from([
            (USER_DIR_ENV_VAR.to_string(), temp.path().display().to_string()),
            (LOG_LOCATION.name.to_string(), "~/logs".to_string()),
            (JOB_PLAN_LOCATION.name.to_string(), "~/plans".to_string()),
        ]);

        let locations = resolve_storage_locations_with(&env).unwrap();

        assert_eq!(locations.log_dir, temp.path().join("logs"));
        assert_eq!(locations.job_plan_dir, temp.path().join("plans"));
        assert!(locations.job_plan_dir.is_dir());
    }

    #[test]
    fn test_tilde_without_user_dir_is_left_alone() {
        let temp = TempDir::new().unwrap();
        let env = HashMap::from([(
            LOG_LOCATION.name.to_string(),
            temp.path().join("~literal").display().to_string(),
        )]);

        let locations = resolve_storage_locations_with(&env).unwrap();

        assert_eq!(locations.log_dir, temp.path().join("~literal"));
    }

    #[test]
    fn test_plan_dir_failure_names_its_variable() {
        let temp = TempDir::new().unwrap();
        let env = HashMap::from([
            (HOME_ENV_VAR.to_string(), temp.path().display().to_string()),
            (
                JOB_PLAN_LOCATION.name.to_string(),
                temp.path().join("a").join("b").display().to_string(),
            ),
        ]);

        let err = resolve_storage_locations_with(&env).unwrap_err();
        assert!(matches!(err, StorageError::JobPlanDir { .. }));
        assert!(err.to_string().contains("AZCOPY_JOB_PLAN_LOCATION"));
    }
}
