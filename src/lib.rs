//! Startup plumbing for the azcopy transfer tool: locating (and provisioning) the
//! per-user `.azcopy` data directory, deriving log and job plan folders from it,
//! and adjusting child processes for the current platform before they are launched.

pub mod constants;
pub mod core;
pub mod system;

pub use crate::core::environment::{Environment, EnvironmentVariable, ProcessEnv};
pub use crate::core::layout::{
    StorageError, StorageLocations, resolve_storage_locations, resolve_storage_locations_with,
};
pub use crate::core::paths::{
    AppDataDir, AppDataError, app_data_dir, resolve_app_data_dir, resolve_app_data_dir_with,
};
pub use crate::system::process::{PlatformProcess, adjust_process_for_platform};
