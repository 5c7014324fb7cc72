//! Port abstraction for the user store and its errors.
//!
//! The store is a keyed mapping from [`UserId`] to [`User`]. It knows nothing
//! about email uniqueness; that rule lives in the directory service, which
//! serialises writes around the check and the mutation.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserRepositoryError {
        /// An insert reused an identifier that is already stored.
        DuplicateId { id: UserId } => "user {id} already exists",
        /// A replace or remove referenced an identifier that is not stored.
        Missing { id: UserId } => "user {id} does not exist",
        /// The backing store failed to execute the operation.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Keyed store of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record. The identifier must not already be present.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Return every stored record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Overwrite an existing record in place, keeping its position.
    async fn replace(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Remove a record, returning it.
    async fn remove(&self, id: &UserId) -> Result<User, UserRepositoryError>;
}
