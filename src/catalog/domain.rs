pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::Reviews;
use crate::books::dto::{BookCatalogDto, BookDto, BookMatchDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_books(&self) -> LibraryResult<BookCatalogDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookMatchDto>>;
    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookMatchDto>>;
    async fn find_reviews_by_isbn(&self, isbn: &str) -> LibraryResult<Reviews>;
}
