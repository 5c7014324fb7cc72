//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed user record, the transport-agnostic
//! error type, and the directory service that enforces email uniqueness over
//! a pluggable store. Nothing in here knows about HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload shared by every adapter.
//! - User, UserProfile and the field newtypes: validated records.
//! - UserDirectoryService: implements the `UsersCommand` and `UsersQuery`
//!   driving ports over any `UserRepository`.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Age, EMAIL_MAX_LEN, EmailAddress, User, UserId, UserName, UserProfile, UserValidationError,
};
pub use self::user_directory_service::{
    EMAIL_TAKEN_BY_OTHER_MESSAGE, EMAIL_TAKEN_MESSAGE, UserDirectoryService, email_owner,
    user_not_found,
};
