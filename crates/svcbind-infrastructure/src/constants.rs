//! Shared infrastructure constants

/// Environment variable holding the raw binding data (JSON array)
pub const DEFAULT_BINDINGS_ENV_VAR: &str = "SVCBIND_SERVICES";

/// Prefix for configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "SVCBIND";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "svcbind.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "svcbind";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default malformed-entry policy token
pub const DEFAULT_MALFORMED_POLICY: &str = "abort";
