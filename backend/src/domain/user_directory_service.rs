//! User directory domain service.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports over any
//! [`UserRepository`]. Mutations are serialised through a single async mutex
//! so the email uniqueness scan and the store write happen atomically with
//! respect to other writers. Reads go straight to the repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{EmailAddress, Error, User, UserId, UserProfile};

/// Message returned when a create collides with a stored email.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered.";
/// Message returned when an update collides with another user's email.
pub const EMAIL_TAKEN_BY_OTHER_MESSAGE: &str = "Email already registered to another user.";

/// Find the user holding `email`, ignoring `exclude`.
///
/// Linear in the number of stored users.
///
/// # Examples
/// ```
/// use user_directory::domain::{EmailAddress, User, UserId, UserProfile, email_owner};
///
/// let profile = UserProfile::try_from_parts("Alice", "a@x.com", 30).expect("profile");
/// let alice = User::new(UserId::random(), profile);
/// let email = EmailAddress::new("a@x.com").expect("email");
///
/// assert_eq!(email_owner(std::slice::from_ref(&alice), &email, None), Some(alice.id()));
/// assert_eq!(email_owner(std::slice::from_ref(&alice), &email, Some(alice.id())), None);
/// ```
pub fn email_owner(users: &[User], email: &EmailAddress, exclude: Option<UserId>) -> Option<UserId> {
    users
        .iter()
        .filter(|user| Some(user.id()) != exclude)
        .find(|user| user.email() == email)
        .map(User::id)
}

/// Build the error returned for an unknown user identifier.
pub fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("User with ID {id} not found.")).with_details(json!({
        "id": id.to_string(),
        "code": "user_not_found",
    }))
}

fn email_taken(message: &str) -> Error {
    Error::conflict(message).with_details(json!({
        "field": "email",
        "code": "email_taken",
    }))
}

/// User directory service implementing the driving ports.
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
    writes: Mutex<()>,
}

impl<R> UserDirectoryService<R> {
    /// Create a service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            writes: Mutex::new(()),
        }
    }
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    fn map_repository_error(err: UserRepositoryError) -> Error {
        match err {
            UserRepositoryError::Missing { id } => user_not_found(id),
            UserRepositoryError::DuplicateId { id } => {
                error!(user_id = %id, "generated user id collided with a stored record");
                Error::internal(format!("user {id} already exists"))
            }
            UserRepositoryError::Query { message } => {
                error!(%message, "user store query failed");
                Error::internal(format!("user store error: {message}"))
            }
        }
    }

    async fn ensure_email_available(
        &self,
        email: &EmailAddress,
        exclude: Option<UserId>,
        message: &str,
    ) -> Result<(), Error> {
        let users = self
            .repository
            .list()
            .await
            .map_err(Self::map_repository_error)?;
        match email_owner(&users, email, exclude) {
            Some(owner) => {
                debug!(owner = %owner, "email already registered");
                Err(email_taken(message))
            }
            None => Ok(()),
        }
    }

    async fn require_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(&id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create(&self, profile: UserProfile) -> Result<User, Error> {
        let _guard = self.writes.lock().await;
        self.ensure_email_available(profile.email(), None, EMAIL_TAKEN_MESSAGE)
            .await?;

        let user = User::new(UserId::random(), profile);
        self.repository
            .insert(&user)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(&self, id: UserId, profile: UserProfile) -> Result<User, Error> {
        let _guard = self.writes.lock().await;
        self.require_user(id).await?;
        self.ensure_email_available(profile.email(), Some(id), EMAIL_TAKEN_BY_OTHER_MESSAGE)
            .await?;

        let user = User::new(id, profile);
        self.repository
            .replace(&user)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %id, "user replaced");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        let _guard = self.writes.lock().await;
        self.repository
            .remove(&id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn list(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.require_user(id).await
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
