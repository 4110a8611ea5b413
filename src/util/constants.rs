// ClientSearch - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ClientSearch";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ClientSearch";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Store limits
// =============================================================================

/// Default cap on the size of a client list file.
///
/// The whole file is read into memory and then parsed into a second
/// in-memory representation, so the cap bounds peak usage at a small
/// multiple of this value.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 256 * 1024 * 1024; // 256 MB

/// Minimum sensible value for the file-size cap.
pub const MIN_MAX_FILE_BYTES: u64 = 1024; // 1 KB

/// Hard upper bound on the file-size cap (prevents configuration mistakes).
pub const ABSOLUTE_MAX_FILE_BYTES: u64 = 4 * 1024 * 1024 * 1024; // 4 GB

// =============================================================================
// Record fields
// =============================================================================

/// JSON key holding the client identifier.
pub const FIELD_ID: &str = "id";

/// JSON key holding the client's display name.
pub const FIELD_FULL_NAME: &str = "full_name";

/// JSON key holding the client's email address.
pub const FIELD_EMAIL: &str = "email";

// =============================================================================
// Output
// =============================================================================

/// Column header used for CSV and pretty output, in record field order.
pub const OUTPUT_COLUMNS: [&str; 3] = [FIELD_ID, FIELD_FULL_NAME, FIELD_EMAIL];

/// Output format names accepted in `[output] format`.
pub const OUTPUT_FORMATS: &[&str] = &["pretty", "json", "csv"];

/// Output format used when neither --format nor config choose one.
pub const DEFAULT_OUTPUT_FORMAT: &str = "pretty";

/// Placeholder shown in pretty output for an absent value.
pub const PRETTY_ABSENT: &str = "-";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config override it.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Files
// =============================================================================

/// Name of the optional configuration file in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
