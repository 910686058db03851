use std::fmt;
use std::fmt::{Debug, Formatter};
use serde::{Deserialize, Serialize};
use crate::users::domain::model::UserEntity;

// UserDto is a data transfer object for the user service; the password is accepted
// on input and never serialized back out.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDto {
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl UserDto {
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Debug for UserDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDto")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            username: other.username.to_string(),
            password: other.password.to_string(),
        }
    }
}

impl From<&UserDto> for UserEntity {
    fn from(other: &UserDto) -> Self {
        Self {
            username: other.username.to_string(),
            password: other.password.to_string(),
        }
    }
}
