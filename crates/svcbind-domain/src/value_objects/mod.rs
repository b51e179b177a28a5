//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CredentialDescriptor`] | Structured connection details of one bound service |
//! | [`CredentialUri`] | Parsed form of a raw connection string |

/// Credential descriptor value object
pub mod credential;
/// Connection-URI parsing
pub mod uri;

// Re-export commonly used value objects
pub use credential::CredentialDescriptor;
pub use uri::CredentialUri;
