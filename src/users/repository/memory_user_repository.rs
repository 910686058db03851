use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::{LibraryError, LibraryResult};
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

// MemoryUserRepository keeps users in registration order. The uniqueness scan and
// the append run under the same write lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<UserEntity>>>,
}

impl MemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn usernames(&self) -> Vec<String> {
        self.users.read().await.iter().map(|u| u.username.to_string()).collect()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, entity: &UserEntity) -> LibraryResult<usize> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == entity.username) {
            return Err(LibraryError::duplicate_key("User already exists!"));
        }
        users.push(entity.clone());
        Ok(1)
    }

    async fn exists(&self, username: &str) -> LibraryResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.username == username))
    }
}
