// src/core/paths.rs

//! Locating and provisioning the per-user `.azcopy` directory.

use crate::constants::APP_DIR_NAME;
use crate::core::environment::{Environment, ProcessEnv};
use lazy_static::lazy_static;
use std::fs::DirBuilder;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

lazy_static! {
    static ref APP_DATA_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Why the application data directory could not be provided.
#[derive(Error, Debug)]
pub enum AppDataError {
    /// No home location was found in the environment.
    #[error("Could not determine the user's home directory.")]
    HomeNotFound,
    /// Creating the directory failed for a reason other than "already exists".
    #[error("Could not create app data directory at '{path}': {source}")]
    Creation {
        /// The directory that was attempted.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// Something other than a directory already occupies the path.
    #[error("App data path '{path}' exists but is not a directory.")]
    NotADirectory {
        /// The occupied path.
        path: String,
    },
}

/// The outcome of resolving the `.azcopy` directory.
///
/// Resolution is best effort: callers are expected to carry on without persistent
/// local state when the directory is [`AppDataDir::Unavailable`]. The reason is kept
/// so it can still be reported.
#[derive(Debug)]
pub enum AppDataDir {
    /// The directory exists (freshly created or pre-existing) at this path.
    Available(PathBuf),
    /// The directory could not be provided.
    Unavailable(AppDataError),
}

impl AppDataDir {
    /// Returns the directory path if it is available.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Available(path) => Some(path),
            Self::Unavailable(_) => None,
        }
    }

    /// Returns `true` if the directory exists and can be used.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Consumes the result, returning the path if available.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Available(path) => Some(path),
            Self::Unavailable(_) => None,
        }
    }

    /// Converts into a plain `Result` for callers that want to propagate the failure.
    pub fn into_result(self) -> Result<PathBuf, AppDataError> {
        match self {
            Self::Available(path) => Ok(path),
            Self::Unavailable(reason) => Err(reason),
        }
    }

    /// Returns the path as a string, or an empty string when unavailable.
    pub fn into_sentinel_string(self) -> String {
        self.into_path()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// What [`ensure_dir`] found or did at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirState {
    Created,
    Existing,
    NotADirectory,
}

/// Creates a single directory level at `path` with full permissions (subject to umask).
///
/// An already existing directory is not an error. The parent must exist.
pub(crate) fn ensure_dir(path: &Path) -> io::Result<DirState> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    match builder.create(path) {
        Ok(()) => Ok(DirState::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(DirState::Existing)
            } else {
                Ok(DirState::NotADirectory)
            }
        }
        Err(e) => Err(e),
    }
}

/// Formats a path for messages, without Windows verbatim prefixes.
pub(crate) fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}

/// Resolves `<home>/.azcopy` from the process environment, creating it if needed.
///
/// Never fails loudly: every problem other than "already exists" is reported as
/// [`AppDataDir::Unavailable`] and logged at `warn` level.
pub fn resolve_app_data_dir() -> AppDataDir {
    resolve_app_data_dir_with(&ProcessEnv)
}

/// Same as [`resolve_app_data_dir`], reading the home location from `env`.
pub fn resolve_app_data_dir_with(env: &impl Environment) -> AppDataDir {
    let resolved = match env.home_dir() {
        Some(home) => provision(home.join(APP_DIR_NAME)),
        None => AppDataDir::Unavailable(AppDataError::HomeNotFound),
    };

    if let AppDataDir::Unavailable(reason) = &resolved {
        log::warn!("App data directory unavailable: {}", reason);
    }
    resolved
}

fn provision(path: PathBuf) -> AppDataDir {
    match ensure_dir(&path) {
        Ok(DirState::Created) => {
            log::debug!("Created app data directory at '{}'.", display_path(&path));
            AppDataDir::Available(path)
        }
        Ok(DirState::Existing) => {
            log::debug!("Using existing app data directory at '{}'.", display_path(&path));
            AppDataDir::Available(path)
        }
        Ok(DirState::NotADirectory) => AppDataDir::Unavailable(AppDataError::NotADirectory {
            path: display_path(&path),
        }),
        Err(e) => AppDataDir::Unavailable(AppDataError::Creation {
            path: display_path(&path),
            source: e,
        }),
    }
}

/// Returns the `.azcopy` directory for this process, creating it on first use.
///
/// The first successful resolution is cached for the life of the process. An
/// unavailable result is not cached, so a later call can still succeed once the
/// underlying problem is fixed.
pub fn app_data_dir() -> AppDataDir {
    resolve_cached(&APP_DATA_DIR, &ProcessEnv)
}

fn resolve_cached(cache: &Mutex<Option<PathBuf>>, env: &impl Environment) -> AppDataDir {
    // A panic while holding the lock cannot leave a half-written path behind.
    let mut cached_path_guard = cache.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(path) = &*cached_path_guard {
        return AppDataDir::Available(path.clone());
    }

    let resolved = resolve_app_data_dir_with(env);
    if let AppDataDir::Available(path) = &resolved {
        *cached_path_guard = Some(path.clone());
    }
    resolved
}
