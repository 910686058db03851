use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookCatalogDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{matches_predicate, Repository};

// MemoryBookRepository serves a catalog that is loaded once and never mutated, so
// readers share it without locking.
#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    books: Arc<IndexMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new(books: Vec<BookEntity>) -> Self {
        let books: IndexMap<String, BookEntity> = books.into_iter().map(|book| (book.id(), book)).collect();
        Self {
            books: Arc::new(books),
        }
    }

    // parses a json object of isbn -> {author, title, reviews}
    pub(crate) fn from_json(json: &str) -> LibraryResult<Self> {
        let catalog: BookCatalogDto = serde_json::from_str(json)?;
        Ok(Self::new(catalog.iter().map(|(isbn, book)| BookEntity::from_dto(isbn, book)).collect()))
    }

    pub(crate) fn len(&self) -> usize {
        self.books.len()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned().ok_or_else(|| LibraryError::not_found("Book not found"))
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let mut records = vec![];
        for book in self.books.values() {
            if matches_predicate(book, predicate)? {
                records.push(book.clone());
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.values().cloned().collect())
    }
}
