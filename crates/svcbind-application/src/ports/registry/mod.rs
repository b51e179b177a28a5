//! Service Kind Registry
//!
//! Defines the auto-registration infrastructure for service kinds.
//! Uses the `linkme` crate for compile-time registration of the kinds
//! that can be resolved at runtime.
//!
//! ```text
//! 1. Kind defines:     #[linkme::distributed_slice(SERVICE_KINDS)]
//!                      static ENTRY: ServiceKindEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                      pub static SERVICE_KINDS: [ServiceKindEntry] = [..]
//! 3. Catalog queries:  kind_for(scheme, hint)
//! 4. Registrar builds: resolve_connector(descriptor)
//! ```
//!
//! The slice is the kind-to-label table: each descriptor kind is
//! associated with exactly one label, fixed at compile time, never
//! inferred from the binding data. Adding a backing-service kind means
//! adding one provider module plus its entry; parser and catalog are
//! untouched.

pub mod kind;

pub use kind::{
    SERVICE_KINDS, ServiceKindEntry, kind_for, list_service_kinds, resolve_connector,
};
