// src/constants.rs

//! Directory names and platform environment variable names.

/// The name of the hidden per-user application data directory (inside the home location).
pub const APP_DIR_NAME: &str = ".azcopy";

/// The name of the job plan directory created under the log folder by default.
pub const PLANS_DIR_NAME: &str = "plans";

/// The environment variable holding the user's home location on Unix-like systems.
#[cfg(not(windows))]
pub const HOME_ENV_VAR: &str = "HOME";

/// The environment variable holding the user's local application data location on Windows.
#[cfg(windows)]
pub const HOME_ENV_VAR: &str = "LOCALAPPDATA";

/// The environment variable holding the user's own directory, used for `~` expansion.
#[cfg(not(windows))]
pub const USER_DIR_ENV_VAR: &str = "HOME";

/// The environment variable holding the user's profile directory, used for `~` expansion.
#[cfg(windows)]
pub const USER_DIR_ENV_VAR: &str = "USERPROFILE";
