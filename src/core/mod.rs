// src/core/mod.rs

//! Locating the directories the tool stores its files in.

pub mod environment;
pub mod layout;
pub mod paths;
