//! Command implementations for lipstick
//!
//! Each command is organized into its own module.

pub mod init;
pub mod install;
pub mod list;
pub mod rewrite;
pub mod uninstall;
