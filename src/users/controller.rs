use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, server_error, ServerError};
use crate::users::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest, RegisterUserCommandResponse};

// registration failures are reported as 404 to match the published api
fn registration_error(err: CommandError) -> ServerError {
    match err {
        CommandError::DuplicateKey { .. } | CommandError::Validation { .. } => {
            server_error(StatusCode::NOT_FOUND, err.message())
        }
        _ => ServerError::from(err),
    }
}

pub(crate) async fn register(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<RegisterUserCommandResponse>, ServerError> {
    let req: RegisterUserCommandRequest = if body.is_empty() {
        RegisterUserCommandRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(json_to_server_error)?
    };
    let res = RegisterUserCommand::new(state.user_service).execute(req).await.map_err(registration_error)?;
    Ok(Json(res))
}
