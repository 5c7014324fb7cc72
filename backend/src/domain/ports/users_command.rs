//! Driving port for user mutations.
//!
//! Inbound adapters call this port with already-validated profiles; the
//! implementation owns identifier generation and email uniqueness.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserProfile};

/// Domain use-case port for creating, replacing, and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user under a freshly generated identifier.
    ///
    /// Fails with [`crate::domain::ErrorCode::Conflict`] when the email is
    /// already registered.
    async fn create(&self, profile: UserProfile) -> Result<User, Error>;

    /// Replace every profile field of an existing user.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for unknown ids and
    /// [`crate::domain::ErrorCode::Conflict`] when another user holds the
    /// email.
    async fn update(&self, id: UserId, profile: UserProfile) -> Result<User, Error>;

    /// Remove a user.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
