use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::users::domain::model::UserEntity;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;
use crate::users::repository::UserRepository;

pub(crate) struct UserServiceImpl {
    branch_id: String,
    user_repository: Arc<dyn UserRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl UserServiceImpl {
    pub(crate) fn new(config: &Configuration, user_repository: Arc<dyn UserRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            user_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register_user(&self, user: &UserDto) -> LibraryResult<()> {
        if user.username.is_empty() || user.password.is_empty() {
            return Err(LibraryError::validation("Unable to register user.", Some("missing_fields".to_string())));
        }
        let event = DomainEvent::added(
            "users", "users", user.username.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), user)?;
        if let Err(err) = self.user_repository.create(&UserEntity::from(user)).await {
            warn!(username = user.username.as_str(), "registration rejected {}", err);
            return Err(err);
        }
        info!(username = user.username.as_str(), "registered user");
        // publish failures are logged only; the user stays registered
        if let Err(err) = self.events_publisher.publish(&event).await {
            warn!(username = user.username.as_str(), event_id = event.event_id.as_str(), "failed to publish registration event {}", err);
        }
        Ok(())
    }

    async fn user_exists(&self, username: &str) -> LibraryResult<bool> {
        self.user_repository.exists(username).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEvent;
    use crate::core::library::LibraryError;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::MemoryPublisher;
    use crate::users::domain::service::UserServiceImpl;
    use crate::users::domain::UserService;
    use crate::users::dto::UserDto;
    use crate::users::repository::memory_user_repository::MemoryUserRepository;

    struct UnavailablePublisher {}

    #[async_trait]
    impl EventPublisher for UnavailablePublisher {
        async fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::runtime("event bus unavailable", None))
        }
    }

    fn build_service() -> (UserServiceImpl, Arc<MemoryPublisher>) {
        let publisher = Arc::new(MemoryPublisher::new());
        let svc = UserServiceImpl::new(&Configuration::new("test"), Arc::new(MemoryUserRepository::new()), publisher.clone());
        (svc, publisher)
    }

    #[tokio::test]
    async fn test_should_register_user() {
        let (user_svc, publisher) = build_service();

        assert!(!user_svc.user_exists("alice").await.expect("should check"));
        let _ = user_svc.register_user(&UserDto::new("alice", "secret")).await.expect("should register user");
        assert!(user_svc.user_exists("alice").await.expect("should check"));
        assert_eq!(vec![("users".to_string(), "alice".to_string())], publisher.published().await);
    }

    #[tokio::test]
    async fn test_should_register_when_publish_fails() {
        let user_svc = UserServiceImpl::new(&Configuration::new("test"), Arc::new(MemoryUserRepository::new()),
                                            Arc::new(UnavailablePublisher {}));

        let _ = user_svc.register_user(&UserDto::new("alice", "secret")).await.expect("should register user");
        assert!(user_svc.user_exists("alice").await.expect("should check"));
        let res = user_svc.register_user(&UserDto::new("alice", "secret")).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_user() {
        let (user_svc, publisher) = build_service();

        let _ = user_svc.register_user(&UserDto::new("alice", "secret")).await.expect("should register user");
        match user_svc.register_user(&UserDto::new("alice", "other")).await {
            Err(LibraryError::DuplicateKey { message }) => {
                assert_eq!("User already exists!", message.as_str());
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(1, publisher.published().await.len());
    }

    #[tokio::test]
    async fn test_should_reject_missing_fields() {
        let (user_svc, publisher) = build_service();

        for (username, password) in [("", "secret"), ("alice", ""), ("", "")] {
            let res = user_svc.register_user(&UserDto::new(username, password)).await;
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
        }
        assert!(!user_svc.user_exists("alice").await.expect("should check"));
        assert!(publisher.published().await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_register_once_under_concurrency() {
        let (user_svc, _) = build_service();
        let user_svc: Arc<dyn UserService> = Arc::new(user_svc);

        let mut handles = vec![];
        for _ in 0..8 {
            let svc = user_svc.clone();
            handles.push(tokio::spawn(async move {
                svc.register_user(&UserDto::new("alice", "secret")).await
            }));
        }
        let mut registered = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.expect("task should finish") {
                Ok(_) => registered += 1,
                Err(LibraryError::DuplicateKey { .. }) => conflicts += 1,
                Err(err) => panic!("unexpected error {}", err),
            }
        }
        assert_eq!(1, registered);
        assert_eq!(7, conflicts);
    }
}
