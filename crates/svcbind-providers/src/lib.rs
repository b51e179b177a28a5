//! # svcbind - Service Kind Implementations
//!
//! One module per supported backing-service kind. Each kind implements the
//! `ServiceConnector` port from `svcbind-domain` and submits a
//! `ServiceKindEntry` into the `SERVICE_KINDS` linkme slice declared in
//! `svcbind-application`.
//!
//! ## Supported kinds
//!
//! | Label | Schemes | Connection string |
//! |-------|---------|-------------------|
//! | `mysql` | `mysql` | `jdbc:mysql://host:port/db?user=..&password=..` |
//! | `postgresql` | `postgres`, `postgresql` | `jdbc:postgresql://host:port/db?user=..&password=..` |
//! | `oracle` | `oracle` | `jdbc:oracle:thin:user/password@host:port/sid` |
//! | `redis` | `redis`, `rediss` | the connection URI |
//! | `mongodb` | `mongodb` | the connection URI |
//! | `amqp` | `amqp`, `amqps` | the connection URI |
//! | `smtp` | `smtp` | the connection URI |
//!
//! This crate must be a real dependency (not dev-only) of whatever links
//! the final artifact, or the linkme registrations are dropped and no kind
//! resolves.

// Re-export svcbind-domain types commonly used with connectors
pub use svcbind_domain::error::{Error, Result};
pub use svcbind_domain::ports::providers::ServiceConnector;

/// AMQP message broker kind
pub mod amqp;
/// MongoDB document store kind
pub mod mongodb;
/// Redis key-value store kind
pub mod redis;
/// Relational database kinds (MySQL, PostgreSQL, Oracle)
pub mod relational;
/// SMTP mail relay kind
pub mod smtp;

pub use amqp::AmqpConnector;
pub use mongodb::MongoConnector;
pub use redis::RedisConnector;
pub use relational::{OracleConnector, RelationalConnector};
pub use smtp::SmtpConnector;
