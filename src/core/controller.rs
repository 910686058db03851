use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::users::domain::UserService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<dyn CatalogService>, user_service: Arc<dyn UserService>) -> AppState {
        AppState {
            catalog_service,
            user_service,
        }
    }
}

// MessageResponse is the json body of every failure and of registration success
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<MessageResponse>);

pub(crate) fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(MessageResponse::new(message)))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => {
                StatusCode::CONFLICT
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        server_error(status, err.message())
    }
}
