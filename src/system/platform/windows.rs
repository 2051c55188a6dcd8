// src/system/platform/windows.rs

use std::os::windows::process::CommandExt;
use std::process::Command as StdCommand;
use tokio::process::Command as TokioCommand;

/// Keeps Ctrl+C / Ctrl+Break sent to our console from reaching the child.
const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

pub(crate) fn adjust_std_command(command: &mut StdCommand) {
    command.creation_flags(CREATE_NEW_PROCESS_GROUP);
    log::debug!("Starting '{}' in a new process group.", command.get_program().to_string_lossy());
}

pub(crate) fn adjust_tokio_command(command: &mut TokioCommand) {
    command.creation_flags(CREATE_NEW_PROCESS_GROUP);
    log::debug!(
        "Starting '{}' in a new process group.",
        command.as_std().get_program().to_string_lossy()
    );
}
