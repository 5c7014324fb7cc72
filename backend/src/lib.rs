//! User directory: an in-memory user store behind a small REST API.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! validated record types and the directory service, [`outbound`] the store
//! adapter, and [`inbound`] the actix-web handlers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
