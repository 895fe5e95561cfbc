/// Errors raised while loading or validating `beacon.toml` and `BEACON_*` overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found or unreadable: {path}: {message}")]
    FileNotFound { path: String, message: String },

    #[error("invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("{field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: String, value: String },
}
