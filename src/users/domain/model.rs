use std::fmt;
use std::fmt::{Debug, Formatter};

// UserEntity is a registered account. The password is stored as submitted and
// must never be logged.
#[derive(Clone, PartialEq)]
pub(crate) struct UserEntity {
    pub username: String,
    pub password: String,
}

impl UserEntity {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Debug for UserEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEntity")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
