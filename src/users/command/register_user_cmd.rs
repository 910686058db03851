use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;
use crate::users::dto::UserDto;

pub(crate) const REGISTERED_MESSAGE: &str = "User successfully registered. Now you can login";

pub(crate) struct RegisterUserCommand {
    user_service: Arc<dyn UserService>,
}

impl RegisterUserCommand {
    pub(crate) fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

// both fields are optional on the wire so that a missing field is a validation
// failure rather than a parse failure
#[derive(Default, Deserialize)]
pub(crate) struct RegisterUserCommandRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RegisterUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
    pub fn build_user(&self) -> UserDto {
        UserDto::new(self.username.as_deref().unwrap_or_default(),
                     self.password.as_deref().unwrap_or_default())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RegisterUserCommandResponse {
    pub message: String,
}

impl RegisterUserCommandResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        let user = req.build_user();
        self.user_service.register_user(&user).await.map_err(CommandError::from)
            .map(|_| RegisterUserCommandResponse::new(REGISTERED_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::users::command::register_user_cmd::{REGISTERED_MESSAGE, RegisterUserCommand, RegisterUserCommandRequest};
    use crate::users::factory;

    fn build_command() -> RegisterUserCommand {
        RegisterUserCommand::new(factory::create_user_service(&Configuration::new("test")))
    }

    #[tokio::test]
    async fn test_should_run_register_user() {
        let cmd = build_command();

        let res = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await.expect("should register user");
        assert_eq!(REGISTERED_MESSAGE, res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_second_registration() {
        let cmd = build_command();

        let _ = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await.expect("should register user");
        let res = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_missing_password() {
        let cmd = build_command();

        let req: RegisterUserCommandRequest = serde_json::from_str(r#"{"username": "alice"}"#).expect("parse request");
        match cmd.execute(req).await {
            Err(CommandError::Validation { message, .. }) => {
                assert_eq!("Unable to register user.", message.as_str());
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
