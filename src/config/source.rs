use std::io::ErrorKind;
use std::path::Path;

use super::DEFAULT_ASSET;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-lipstickrc.toml");

/// Where configuration bytes come from
///
/// Missing or unreadable data is reported as `None`; deciding what to do
/// about it is up to the resolver.
pub trait ConfigSource {
    /// Read the override file at `path`, if there is one
    fn read_override(&self, path: &Path) -> Option<Vec<u8>>;

    /// Read a configuration asset bundled with the program
    fn read_default_asset(&self, name: &str) -> Option<Vec<u8>>;
}

/// File system for overrides, compiled-in bytes for the default
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl ConfigSource for FsSource {
    fn read_override(&self, path: &Path) -> Option<Vec<u8>> {
        match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no override config");
                None
            }
            Err(err) => {
                tracing::info!(path = %path.display(), %err, "override config is unreadable");
                None
            }
        }
    }

    fn read_default_asset(&self, name: &str) -> Option<Vec<u8>> {
        (name == DEFAULT_ASSET).then(|| DEFAULT_CONFIG.as_bytes().to_vec())
    }
}
