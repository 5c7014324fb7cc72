//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Return one user or [`crate::domain::ErrorCode::NotFound`].
    async fn get(&self, id: UserId) -> Result<User, Error>;
}
