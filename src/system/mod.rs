//! # System Interaction Layer
//!
//! Abstractions over the operating system that differ between platform families.
//!
//! ## Modules
//!
//! - **`process`**: The hook callers run on a child process builder right before
//!   spawning it, so platform-specific launch attributes are applied without
//!   branching in caller code.
//! - **`platform`**: The per-platform implementations behind `process`, selected at
//!   compile time.

mod platform;
pub mod process;
