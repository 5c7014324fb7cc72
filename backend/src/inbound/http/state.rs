//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable with mocks.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, replace, and delete users.
    pub users: Arc<dyn UsersCommand>,
    /// Read users.
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from the command and query ports.
    pub fn new(users: Arc<dyn UsersCommand>, users_query: Arc<dyn UsersQuery>) -> Self {
        Self { users, users_query }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_directory::domain::UserDirectoryService;
    /// use user_directory::inbound::http::state::HttpState;
    /// use user_directory::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = Arc::new(UserDirectoryService::new(Arc::new(
    ///     InMemoryUserRepository::new(),
    /// )));
    /// let state = HttpState::from_service(service);
    /// let _query = state.users_query.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersCommand + UsersQuery + 'static,
    {
        let users: Arc<dyn UsersCommand> = service.clone();
        Self::new(users, service)
    }
}
