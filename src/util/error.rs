// ClientSearch - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant keeps the path it relates to and the underlying cause so
// the CLI can print the full chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ClientSearch operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ClientSearchError {
    /// Loading the client store failed.
    Store(StoreError),

    /// Export of query results failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for ClientSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Store error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ClientSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors raised while loading a client list into a store.
///
/// Loading is all-or-nothing: any of these aborts the whole load.
#[derive(Debug)]
pub enum StoreError {
    /// The source file could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The source file exceeds the configured size cap.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The content is not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    NotAnArray { path: PathBuf, found: &'static str },

    /// An element of the top-level array is not an object.
    ElementNotObject {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read client file '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Client file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Malformed JSON in '{}': {source}", path.display())
            }
            Self::NotAnArray { path, found } => write!(
                f,
                "Malformed client list '{}': expected a top-level array, found {found}",
                path.display()
            ),
            Self::ElementNotObject { path, index, found } => write!(
                f,
                "Malformed client list '{}': element {index} is {found}, expected an object",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for ClientSearchError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to rendering or exporting query results.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Output I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for ClientSearchError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// `load_config` turns these into warnings and falls back to defaults;
/// `load_config_strict` returns the first one instead.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ClientSearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ClientSearch results.
pub type Result<T> = std::result::Result<T, ClientSearchError>;

/// Render an error and its `source()` chain as a single line.
///
/// Used by the CLI so that the root cause (e.g. the OS error behind a
/// failed read) is always visible to the user.
pub fn display_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        // Display impls above already embed their direct source; skip repeats.
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        current = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_store_error_wraps_into_top_level() {
        let err: ClientSearchError = StoreError::NotAnArray {
            path: PathBuf::from("clients.json"),
            found: "an object",
        }
        .into();
        assert!(matches!(err, ClientSearchError::Store(_)));
        assert!(err.to_string().contains("expected a top-level array"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StoreError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_display_chain_does_not_repeat_sources() {
        let err: ClientSearchError = StoreError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        }
        .into();
        let chain = display_chain(&err);
        assert_eq!(chain.matches("no such file").count(), 1);
        assert!(chain.starts_with("Store error:"));
    }
}
