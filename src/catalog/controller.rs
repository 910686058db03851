use std::future::Future;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::warn;
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse};
use crate::catalog::command::find_books_by_title_cmd::{FindBooksByTitleCommand, FindBooksByTitleCommandRequest, FindBooksByTitleCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_reviews_cmd::{GetReviewsCommand, GetReviewsCommandRequest, GetReviewsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::dto::{AUTHOR_SUGGESTION, AuthorSearchDto, SearchFailureDto, TITLE_SUGGESTION, TitleSearchDto};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, server_error, ServerError};

pub(crate) type SearchError = (StatusCode, Json<SearchFailureDto>);

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn.as_str());
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<FindBooksByAuthorCommandResponse>, ServerError> {
    let req = FindBooksByAuthorCommandRequest::new(author.as_str());
    let res = FindBooksByAuthorCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<FindBooksByTitleCommandResponse>, ServerError> {
    let req = FindBooksByTitleCommandRequest::new(title.as_str());
    let res = FindBooksByTitleCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_reviews_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetReviewsCommandResponse>, ServerError> {
    let req = GetReviewsCommandRequest::new(isbn.as_str());
    let res = GetReviewsCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

// resolves a command on its own task and awaits the outcome; there is no added delay
async fn deferred<T, F>(fut: F) -> Result<T, CommandError>
    where F: Future<Output=Result<T, CommandError>> + Send + 'static,
          T: Send + 'static {
    tokio::spawn(fut).await.map_err(|err| CommandError::Runtime {
        message: format!("deferred lookup did not complete {}", err),
        reason_code: None,
    })?
}

fn search_error(err: CommandError, suggestion: &str) -> SearchError {
    let (status, Json(body)) = ServerError::from(err);
    (status, Json(SearchFailureDto::new(body.message.as_str(), suggestion)))
}

pub(crate) async fn list_books_deferred(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let cmd = ListBooksCommand::new(state.catalog_service);
    deferred(async move { cmd.execute(ListBooksCommandRequest::default()).await }).await
        .map(Json)
        .map_err(|err| {
            warn!("deferred book listing failed {:?}", err);
            server_error(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching books")
        })
}

pub(crate) async fn find_book_by_isbn_deferred(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let cmd = GetBookCommand::new(state.catalog_service);
    let res = deferred(async move { cmd.execute(GetBookCommandRequest::new(isbn.as_str())).await }).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_author_deferred(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<AuthorSearchDto>, SearchError> {
    let cmd = FindBooksByAuthorCommand::new(state.catalog_service);
    deferred(async move { cmd.execute(FindBooksByAuthorCommandRequest::new(author.as_str())).await }).await
        .map(|res| Json(AuthorSearchDto::new(res.books)))
        .map_err(|err| search_error(err, AUTHOR_SUGGESTION))
}

pub(crate) async fn find_books_by_title_deferred(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<TitleSearchDto>, SearchError> {
    let cmd = FindBooksByTitleCommand::new(state.catalog_service);
    let wanted = title.to_string();
    deferred(async move { cmd.execute(FindBooksByTitleCommandRequest::new(title.as_str())).await }).await
        .map(|res| Json(TitleSearchDto::new(res.books)))
        .map_err(|err| match err {
            CommandError::NotFound { .. } => search_error(CommandError::NotFound {
                message: format!("No books found with title '{}'", wanted),
            }, TITLE_SUGGESTION),
            other => search_error(other, TITLE_SUGGESTION),
        })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::catalog::controller::{deferred, search_error};
    use crate::catalog::dto::AUTHOR_SUGGESTION;
    use crate::core::command::CommandError;

    #[tokio::test]
    async fn test_should_resolve_deferred() {
        let res = deferred(async { Ok::<_, CommandError>(42) }).await.expect("should resolve");
        assert_eq!(42, res);

        let res = deferred(async { Err::<u32, _>(CommandError::NotFound { message: "x".to_string() }) }).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_report_panicked_deferred_as_runtime() {
        let res = deferred(async {
            if true {
                panic!("lookup panicked");
            }
            Ok::<u32, CommandError>(0)
        }).await;
        assert!(matches!(res, Err(CommandError::Runtime { .. })));
    }

    #[tokio::test]
    async fn test_should_wrap_search_error() {
        let (status, body) = search_error(CommandError::NotFound { message: "No books found by author 'x'".to_string() }, AUTHOR_SUGGESTION);
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(!body.0.success);
        assert_eq!("No books found by author 'x'", body.0.message.as_str());
        assert_eq!(AUTHOR_SUGGESTION, body.0.suggestion.as_str());
    }
}
