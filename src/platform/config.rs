// ClientSearch - platform/config.rs
//
// Platform-specific config directory resolution and config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ClientSearch configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/clientsearch/ or %APPDATA%\ClientSearch\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[store]` section.
    pub store: StoreSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[store]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Largest client file accepted, in bytes.
    pub max_file_bytes: Option<u64>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format: "pretty", "json" or "csv".
    pub format: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Size cap passed to the store loader.
    pub max_file_bytes: u64,
    /// Output format used when --format is not given. Always one of
    /// `constants::OUTPUT_FORMATS`, lower-cased.
    pub output_format: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: constants::DEFAULT_MAX_FILE_BYTES,
            output_format: constants::DEFAULT_OUTPUT_FORMAT.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// Warnings are returned rather than logged; logging is not yet initialised
/// when this runs.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let raw = match read_raw(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            return (AppConfig::default(), vec![format!("{e}. Using defaults.")]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, errors) = validate(raw);
    let warnings: Vec<String> = errors.iter().map(|e| format!("{e}. Using default.")).collect();

    (config, warnings)
}

/// Load `config.toml` at `config_path`, failing on the first problem.
///
/// Used when the user names a config file explicitly: a missing file,
/// a parse failure, or an out-of-range value is an error rather than a
/// silent fallback.
pub fn load_config_strict(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = read_raw(config_path)?;
    let (config, mut errors) = validate(raw);
    if errors.is_empty() {
        tracing::info!(path = %config_path.display(), "Loaded config.toml");
        Ok(config)
    } else {
        Err(errors.remove(0))
    }
}

fn read_raw(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })
}

/// Validate each field against named constants, accumulating all errors.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut errors = Vec::new();

    // -- Store: max_file_bytes --
    if let Some(bytes) = raw.store.max_file_bytes {
        if (constants::MIN_MAX_FILE_BYTES..=constants::ABSOLUTE_MAX_FILE_BYTES).contains(&bytes) {
            config.max_file_bytes = bytes;
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "[store] max_file_bytes".to_string(),
                value: bytes.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_MAX_FILE_BYTES,
                    constants::ABSOLUTE_MAX_FILE_BYTES
                ),
            });
        }
    }

    // -- Output: format --
    if let Some(ref format) = raw.output.format {
        let lower = format.to_lowercase();
        if constants::OUTPUT_FORMATS.contains(&lower.as_str()) {
            config.output_format = lower;
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "[output] format".to_string(),
                value: format.clone(),
                expected: constants::OUTPUT_FORMATS.join(", "),
            });
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[store]\nmax_file_bytes = 4096\n[output]\nformat = \"CSV\"\n[logging]\nlevel = \"debug\"\n",
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.max_file_bytes, 4096);
        assert_eq!(config.output_format, "csv");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[store]\nmax_file_bytes = 1\n[output]\nformat = \"xml\"\n[logging]\nlevel = \"loud\"\n",
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("max_file_bytes"));
    }

    #[test]
    fn test_unparseable_file_warns_and_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "this is = = not toml");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[future]\nflag = true\n");
        let (_, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_strict_load_reports_first_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output]\nformat = \"xml\"\n");
        let result = load_config_strict(&path);
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_strict_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_strict(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
