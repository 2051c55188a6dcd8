// src/system/platform/unix.rs

use std::process::Command as StdCommand;
use tokio::process::Command as TokioCommand;

// Children keep the parent's process group and session, so there is nothing to set.

pub(crate) fn adjust_std_command(_command: &mut StdCommand) {}

pub(crate) fn adjust_tokio_command(_command: &mut TokioCommand) {}
