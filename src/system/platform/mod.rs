// src/system/platform/mod.rs
//
// One implementation per platform family, aliased as `imp` so the rest of the crate
// never needs its own cfg branches.

#[cfg(not(windows))]
mod unix;
#[cfg(not(windows))]
use unix as imp;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as imp;

pub(crate) use imp::{adjust_std_command, adjust_tokio_command};
