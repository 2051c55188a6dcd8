// src/system/process.rs

//! The pre-launch hook for child process builders.

use super::platform;
use std::process::Command as StdCommand;
use tokio::process::Command as TokioCommand;

/// A child process builder whose launch attributes can be adjusted per platform.
///
/// Implemented for [`std::process::Command`] and [`tokio::process::Command`]. Both are
/// builders, so an adjusted value has by construction not been spawned yet.
pub trait PlatformProcess {
    /// Applies this platform's launch attributes in place.
    fn apply_platform_attributes(&mut self);
}

impl PlatformProcess for StdCommand {
    fn apply_platform_attributes(&mut self) {
        platform::adjust_std_command(self);
    }
}

impl PlatformProcess for TokioCommand {
    fn apply_platform_attributes(&mut self) {
        platform::adjust_tokio_command(self);
    }
}

/// Prepares `process` for launch on the current platform and hands the same builder back.
///
/// On Unix-like systems this leaves the builder untouched. On Windows the child is
/// started in its own process group.
///
/// ```no_run
/// use azcopy_home::adjust_process_for_platform;
/// use std::process::Command;
///
/// let mut command = Command::new("azcopy");
/// command.arg("jobs").arg("list");
/// let child = adjust_process_for_platform(&mut command).spawn();
/// ```
pub fn adjust_process_for_platform<P: PlatformProcess + ?Sized>(process: &mut P) -> &mut P {
    process.apply_platform_attributes();
    process
}
