//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: process-local user store backing the `UserRepository` port.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business rules such as email uniqueness.

pub mod memory;
