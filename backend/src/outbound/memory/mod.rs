//! In-memory user store.
//!
//! Records live for the lifetime of the owning [`InMemoryUserRepository`];
//! nothing is persisted. Each instance is independent, so tests and servers
//! construct their own and inject it where needed.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

#[derive(Debug, Default)]
struct Records {
    next_slot: u64,
    by_slot: BTreeMap<u64, User>,
    slots: HashMap<UserId, u64>,
}

/// `UserRepository` adapter keeping records in process memory.
///
/// Listing returns records in insertion order; replacing a record keeps its
/// original position.
///
/// # Examples
/// ```
/// use user_directory::domain::ports::UserRepository;
/// use user_directory::domain::{User, UserId, UserProfile};
/// use user_directory::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let profile = UserProfile::try_from_parts("Alice", "a@x.com", 30).expect("profile");
/// let user = User::new(UserId::random(), profile);
/// repo.insert(&user).await.expect("insert");
/// assert_eq!(repo.find_by_id(&user.id()).await.expect("find"), Some(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Records>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut records = self.records.write().await;
        let id = user.id();
        if records.slots.contains_key(&id) {
            return Err(UserRepositoryError::duplicate_id(id));
        }

        let slot = records.next_slot;
        records.next_slot += 1;
        records.slots.insert(id, slot);
        records.by_slot.insert(slot, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .slots
            .get(id)
            .and_then(|slot| records.by_slot.get(slot))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let records = self.records.read().await;
        Ok(records.by_slot.values().cloned().collect())
    }

    async fn replace(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut records = self.records.write().await;
        let id = user.id();
        let slot = *records
            .slots
            .get(&id)
            .ok_or_else(|| UserRepositoryError::missing(id))?;
        records.by_slot.insert(slot, user.clone());
        Ok(())
    }

    async fn remove(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let mut records = self.records.write().await;
        let slot = records
            .slots
            .remove(id)
            .ok_or_else(|| UserRepositoryError::missing(*id))?;
        records.by_slot.remove(&slot).ok_or_else(|| {
            UserRepositoryError::query(format!("slot {slot} for user {id} was empty"))
        })
    }
}
