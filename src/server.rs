use axum::{
    body::HttpBody,
    routing::{get, post},
    BoxError, Router,
};
use crate::catalog::controller::{
    find_book_by_isbn, find_book_by_isbn_deferred, find_books_by_author, find_books_by_author_deferred,
    find_books_by_title, find_books_by_title_deferred, find_reviews_by_isbn, list_books, list_books_deferred,
};
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::users::controller::register;
use crate::users::factory::create_user_service;

pub(crate) async fn build_state(config: &Configuration) -> LibraryResult<AppState> {
    let catalog_service = create_catalog_service(config).await?;
    let user_service = create_user_service(config);
    Ok(AppState::new(catalog_service, user_service))
}

// generic over the request body so the same routes serve both lambda and a plain listener
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/register", post(register))
        .route("/books", get(list_books))
        .route("/books/isbn/:isbn", get(find_book_by_isbn))
        .route("/books/author/:author", get(find_books_by_author))
        .route("/books/title/:title", get(find_books_by_title))
        .route("/books/review/:isbn", get(find_reviews_by_isbn))
        .route("/books/promise", get(list_books_deferred))
        .route("/books/promise/isbn/:isbn", get(find_book_by_isbn_deferred))
        .route("/books/promise/author/:author", get(find_books_by_author_deferred))
        .route("/books/promise/title/:title", get(find_books_by_title_deferred))
        .with_state(state)
}
