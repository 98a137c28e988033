//! # lipstick - Make your git commits more expressive
//!
//! lipstick rewrites shorthand tokens in commit messages into emoji codes or
//! any other text, and can install itself as a git hook so every commit
//! message is rewritten automatically.
//!
//! ## Quick Start
//!
//! ```bash
//! # Rewrite a message
//! lipstick ":bugfix handle empty input"
//!
//! # Rewrite every commit message in this repository
//! lipstick install
//!
//! # Customize the mappings
//! lipstick init
//! lipstick list
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use lipstick::config;
//! use lipstick::substitution::substitute;
//! use std::path::Path;
//!
//! let config = config::resolve(Path::new("."), None)?;
//! let message = substitute(&config.commit_kinds, ":init first commit");
//! assert_eq!(message, ":tada: first commit");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod substitution;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::{LipstickConfig, TokenMap};
pub use substitution::{TokenPolicy, substitute, substitute_with};
