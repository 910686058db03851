use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::model::Reviews;
use crate::books::dto::{BookCatalogDto, BookDto, BookMatchDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    async fn find_matches(&self, attribute: &str, value: &str) -> LibraryResult<Vec<BookMatchDto>> {
        let res = self.book_repository.query(
            &HashMap::from([(attribute.to_string(), value.to_string())])).await?;
        debug!(attribute, value, matches = res.len(), "catalog search");
        Ok(res.iter().map(BookMatchDto::from).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_books(&self) -> LibraryResult<BookCatalogDto> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(|b| (b.isbn.to_string(), BookDto::from(b))).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookMatchDto>> {
        let res = self.find_matches("author", author).await?;
        if res.is_empty() {
            return Err(LibraryError::not_found(format!("No books found by author '{}'", author).as_str()));
        }
        Ok(res)
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookMatchDto>> {
        let res = self.find_matches("title", title).await?;
        if res.is_empty() {
            return Err(LibraryError::not_found(format!("No books found by title '{}'", title).as_str()));
        }
        Ok(res)
    }

    async fn find_reviews_by_isbn(&self, isbn: &str) -> LibraryResult<Reviews> {
        self.book_repository.get(isbn).await.map(|b| b.reviews)
    }
}
