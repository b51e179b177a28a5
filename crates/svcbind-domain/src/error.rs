//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for svcbind
///
/// Messages carry the offending service id or a scrubbed form of the raw
/// connection string. The password field never appears in an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A raw connection string does not match the expected shape
    #[error("malformed credential '{raw}': {message}")]
    MalformedCredential {
        /// The offending raw string, with userinfo scrubbed
        raw: String,
        /// Description of the parse failure
        message: String,
    },

    /// Lookup by id found no catalog entry
    #[error("unknown service '{id}'")]
    UnknownService {
        /// The id that was looked up
        id: String,
    },

    /// No service kind is registered for a label
    #[error("no service kind registered for label '{label}'. Available kinds: {available:?}")]
    UnknownKind {
        /// The label that failed to resolve
        label: String,
        /// Labels of all registered kinds
        available: Vec<String>,
    },

    /// Catalog construction failed; no partial catalog is exposed
    #[error("service catalog unavailable: {message}")]
    CatalogUnavailable {
        /// Description of the build failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The raw binding data could not be fetched
    #[error("binding source unavailable: {message}")]
    SourceUnavailable {
        /// Description of the fetch failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registration sink rejected one entry
    #[error("registration of service '{id}' failed: {message}")]
    Registration {
        /// The offending service id
        id: String,
        /// Description of the rejection
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Parse and lookup error creation methods
impl Error {
    /// Create a malformed credential error
    pub fn malformed_credential<R: Into<String>, M: Into<String>>(raw: R, message: M) -> Self {
        Self::MalformedCredential {
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// Create an unknown service error
    pub fn unknown_service<S: Into<String>>(id: S) -> Self {
        Self::UnknownService { id: id.into() }
    }

    /// Create an unknown kind error
    pub fn unknown_kind<S: Into<String>>(label: S, available: Vec<String>) -> Self {
        Self::UnknownKind {
            label: label.into(),
            available,
        }
    }
}

// Catalog and source error creation methods
impl Error {
    /// Create a catalog unavailable error
    pub fn catalog_unavailable<S: Into<String>>(message: S) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a catalog unavailable error with source
    pub fn catalog_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a source unavailable error
    pub fn source_unavailable<S: Into<String>>(message: S) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a source unavailable error with source
    pub fn source_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Registration and configuration error creation methods
impl Error {
    /// Create a registration error
    pub fn registration<I: Into<String>, M: Into<String>>(id: I, message: M) -> Self {
        Self::Registration {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
