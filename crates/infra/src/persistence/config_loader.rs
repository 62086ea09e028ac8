// crates/infra/src/persistence/config_loader.rs
use std::path::Path;

use file_input_domain::FileInputConfig;
use file_input_shared_kernel::{ErrorContext, InfrastructureError, Result};
use log::trace;

use super::file_reader::FileReader;

/// Serialization formats accepted for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses formatter defaults from `contents`.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<FileInputConfig> {
    let config = match format {
        ConfigFormat::Json => serde_json::from_str(contents)?,
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(config)
}

/// Loads formatter defaults from a JSON (or, with the `yaml` feature, YAML) file.
///
/// # Errors
///
/// Fails when the extension is not recognised, the file cannot be read, or
/// its contents do not describe a [`FileInputConfig`].
pub fn load_config(path: &Path) -> Result<FileInputConfig> {
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| InfrastructureError::UnsupportedFormat { path: path.to_path_buf() })?;
    let reader = FileReader::open_buffered(path)?;
    let config = match format {
        ConfigFormat::Json => serde_json::from_reader(reader).map_err(InfrastructureError::from),
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => serde_yaml::from_reader(reader).map_err(InfrastructureError::from),
    }
    .with_context(|| format!("loading {}", path.display()))?;
    trace!("loaded {config:?} from {}", path.display());
    Ok(config)
}
