//! Configuration file loading for the CLI
//!
//! Finds and loads the TOML configuration from an explicit path, the local
//! project directory or the platform config directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use quill::{QuillError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {err}")]
    Read { path: PathBuf, err: std::io::Error },
}

impl From<ConfigError> for QuillError {
    fn from(err: ConfigError) -> Self {
        QuillError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (quill/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns [`QuillError::Config`] if the explicit path does not exist, or if
/// a found file cannot be read or parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QuillError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return Ok(load_config_file(path)?);
    }

    let local_config = Path::new("quill/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return Ok(load_config_file(local_config)?);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "quill", "quill") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return Ok(load_config_file(&system_config)?);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
        path: path.to_path_buf(),
        err,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use quill::config::OutputFormat;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = write_config(
            r#"
            [style]
            background_color = "white"
            stroke_width = 2.5

            [render]
            padding = 4.0
            format = "text"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.render().padding(), 4.0);
        assert_eq!(config.render().format(), OutputFormat::Text);
        assert_eq!(config.style().stroke().unwrap().width(), 2.5);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, QuillError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let file = write_config("[render\npadding = ");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, QuillError::Config(msg) if msg.contains("Failed to parse TOML")));
    }

    #[test]
    fn test_wrong_value_type_is_error() {
        let file = write_config("[render]\nformat = \"png\"\n");
        assert!(load_config(Some(file.path())).is_err());
    }
}
