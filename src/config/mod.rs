//! Configuration management for lipstick
//!
//! This module resolves the token mapping used to rewrite commit messages.
//! A `.lipstickrc` TOML file in the working directory takes precedence; when
//! it is absent or cannot be parsed, the default mapping compiled into the
//! binary is used instead. The two are never merged.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::substitution::TokenPolicy;

mod resolver;
mod source;

pub use resolver::{resolve, resolve_with};
pub use source::{ConfigSource, DEFAULT_CONFIG, FsSource};

/// Name of the override file looked up in the working directory
pub const OVERRIDE_FILE: &str = ".lipstickrc";

/// Name of the embedded default asset
pub const DEFAULT_ASSET: &str = "default-lipstickrc.toml";

/// Token name (without colons) to replacement text
pub type TokenMap = BTreeMap<String, String>;

/// Parsed configuration document
#[derive(Debug, Clone, Deserialize)]
pub struct LipstickConfig {
    /// Token mappings, read from the `commitKinds` table
    #[serde(rename = "commitKinds")]
    pub commit_kinds: TokenMap,

    /// Tokenization policy, if the document picks one
    #[serde(default)]
    pub policy: Option<TokenPolicy>,

    /// Where this configuration came from
    #[serde(skip, default)]
    pub origin: ConfigOrigin,
}

/// Source that won resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Override file at the given path
    Override(PathBuf),
    /// Mapping compiled into the binary
    #[default]
    Embedded,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::Override(path) => write!(f, "{}", path.display()),
            ConfigOrigin::Embedded => f.write_str("built-in defaults"),
        }
    }
}

/// Fatal configuration errors: no mapping could be obtained at all
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("default configuration `{0}` is not available")]
    MissingDefault(String),
    #[error("default configuration `{name}` is invalid: {reason}")]
    InvalidDefault { name: String, reason: String },
}
