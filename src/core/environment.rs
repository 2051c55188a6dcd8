// src/core/environment.rs

//! Environment lookup and the variables the tool understands.

use crate::constants::{HOME_ENV_VAR, USER_DIR_ENV_VAR};
use std::collections::HashMap;
use std::path::PathBuf;

/// A read-only view of the environment the tool was started in.
///
/// Everything in this crate that depends on environment variables goes through
/// this trait, so callers (and tests) can resolve locations against a map
/// instead of the real process environment.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the directory under which the `.azcopy` folder lives.
    ///
    /// Defaults to the platform home variable (`HOME`, or `LOCALAPPDATA` on Windows).
    /// An empty value counts as unset.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var(HOME_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Returns the user's own directory, which `~` expands to.
    ///
    /// This is `HOME` on Unix-like systems and `USERPROFILE` on Windows, so it can
    /// differ from [`Environment::home_dir`].
    fn user_dir(&self) -> Option<PathBuf> {
        self.var(USER_DIR_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var(HOME_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(platform_home_fallback)
    }

    fn user_dir(&self) -> Option<PathBuf> {
        std::env::var(USER_DIR_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
}

#[cfg(not(windows))]
fn platform_home_fallback() -> Option<PathBuf> {
    // Covers sessions started without HOME (cron, some service managers).
    dirs::home_dir()
}

#[cfg(windows)]
fn platform_home_fallback() -> Option<PathBuf> {
    dirs::data_local_dir()
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Describes an environment variable the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentVariable {
    /// The variable name, e.g. `AZCOPY_LOG_LOCATION`.
    pub name: &'static str,
    /// Value used when the variable is unset or empty.
    pub default_value: &'static str,
    /// Human-readable description shown in help output.
    pub description: &'static str,
    /// Hidden variables are read but never listed.
    pub hidden: bool,
}

/// Overrides where log files are stored.
pub const LOG_LOCATION: EnvironmentVariable = EnvironmentVariable {
    name: "AZCOPY_LOG_LOCATION",
    default_value: "",
    description: "Overrides where the log files are stored, to avoid filling up a disk.",
    hidden: false,
};

/// Overrides where job plan files are stored.
pub const JOB_PLAN_LOCATION: EnvironmentVariable = EnvironmentVariable {
    name: "AZCOPY_JOB_PLAN_LOCATION",
    default_value: "",
    description: "Overrides where the job plan files (used for progress tracking and resuming) are stored, to avoid filling up a disk.",
    hidden: false,
};

const KNOWN_VARIABLES: &[EnvironmentVariable] = &[LOG_LOCATION, JOB_PLAN_LOCATION];

/// Returns the variables that should be listed to users.
pub fn visible_environment_variables() -> impl Iterator<Item = &'static EnvironmentVariable> {
    KNOWN_VARIABLES.iter().filter(|var| !var.hidden)
}

/// Reads `variable` from `env`, falling back to its default when unset or empty.
pub fn get_environment_variable(env: &impl Environment, variable: &EnvironmentVariable) -> String {
    match env.var(variable.name) {
        Some(value) if !value.is_empty() => value,
        _ => variable.default_value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_home_dir_reads_platform_variable() {
        let env = env_of(&[(HOME_ENV_VAR, "/tmp/testhome")]);
        assert_eq!(env.home_dir(), Some(PathBuf::from("/tmp/testhome")));
    }

    #[test]
    fn test_empty_home_counts_as_unset() {
        let env = env_of(&[(HOME_ENV_VAR, "")]);
        assert_eq!(env.home_dir(), None);
        assert_eq!(env_of(&[]).home_dir(), None);
    }

    #[test]
    fn test_user_dir_reads_profile_variable() {
        let env = env_of(&[(USER_DIR_ENV_VAR, "/tmp/profile")]);
        assert_eq!(env.user_dir(), Some(PathBuf::from("/tmp/profile")));
        assert_eq!(env_of(&[(USER_DIR_ENV_VAR, "")]).user_dir(), None);
    }

    #[cfg(windows)]
    #[test]
    fn test_user_dir_is_not_local_app_data_on_windows() {
        let env = env_of(&[
            ("LOCALAPPDATA", r"C:\Users\me\AppData\Local"),
            ("USERPROFILE", r"C:\Users\me"),
        ]);
        assert_eq!(env.user_dir(), Some(PathBuf::from(r"C:\Users\me")));
        assert_ne!(env.user_dir(), env.home_dir());
    }

    #[test]
    fn test_get_environment_variable_falls_back_to_default() {
        let with_default = EnvironmentVariable {
            name: "AZCOPY_TEST_KNOB",
            default_value: "true",
            description: "",
            hidden: true,
        };

        assert_eq!(get_environment_variable(&env_of(&[]), &with_default), "true");
        assert_eq!(
            get_environment_variable(&env_of(&[("AZCOPY_TEST_KNOB", "")]), &with_default),
            "true"
        );
        assert_eq!(
            get_environment_variable(&env_of(&[("AZCOPY_TEST_KNOB", "false")]), &with_default),
            "false"
        );
    }

    #[test]
    fn test_visible_variables_are_listed() {
        let names: Vec<_> = visible_environment_variables().map(|v| v.name).collect();
        assert_eq!(names, vec!["AZCOPY_LOG_LOCATION", "AZCOPY_JOB_PLAN_LOCATION"]);
    }
}
