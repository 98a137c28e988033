use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Format, Toml};
use std::path::Path;

use super::{ConfigError, ConfigOrigin, ConfigSource, DEFAULT_ASSET, FsSource, LipstickConfig, OVERRIDE_FILE};

/// Resolve the configuration for `workdir` from the file system.
///
/// `custom` replaces the conventional `.lipstickrc` path; relative paths are
/// taken from `workdir`.
pub fn resolve(workdir: &Path, custom: Option<&Path>) -> Result<LipstickConfig, ConfigError> {
    resolve_with(&FsSource, workdir, custom)
}

/// Resolve the configuration from an arbitrary [`ConfigSource`].
///
/// Exactly one source wins: the override when it exists and parses, the
/// embedded default otherwise. Failing both is a [`ConfigError`].
pub fn resolve_with<S>(
    source: &S,
    workdir: &Path,
    custom: Option<&Path>,
) -> Result<LipstickConfig, ConfigError>
where
    S: ConfigSource + ?Sized,
{
    let override_path = workdir.join(custom.unwrap_or(Path::new(OVERRIDE_FILE)));

    if let Some(bytes) = source.read_override(&override_path) {
        match parse(&bytes) {
            Ok(mut config) => {
                tracing::debug!(path = %override_path.display(), "using override config");
                config.origin = ConfigOrigin::Override(override_path);
                return Ok(config);
            }
            Err(err) => {
                tracing::warn!(
                    path = %override_path.display(),
                    "ignoring override config: {err:#}"
                );
            }
        }
    }

    let bytes = source
        .read_default_asset(DEFAULT_ASSET)
        .ok_or_else(|| ConfigError::MissingDefault(DEFAULT_ASSET.to_string()))?;

    let config = parse(&bytes).map_err(|err| ConfigError::InvalidDefault {
        name: DEFAULT_ASSET.to_string(),
        reason: format!("{err:#}"),
    })?;
    tracing::debug!("using built-in config");

    Ok(config)
}

fn parse(bytes: &[u8]) -> Result<LipstickConfig> {
    let text = std::str::from_utf8(bytes).context("config is not valid UTF-8")?;

    Figment::from(Toml::string(text))
        .extract()
        .context("failed to parse config")
}
