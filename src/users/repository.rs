pub mod memory_user_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::users::domain::model::UserEntity;

#[async_trait]
pub(crate) trait UserRepository: Sync + Send {
    // appends the user unless the username is already taken
    async fn create(&self, entity: &UserEntity) -> LibraryResult<usize>;

    async fn exists(&self, username: &str) -> LibraryResult<bool>;
}
