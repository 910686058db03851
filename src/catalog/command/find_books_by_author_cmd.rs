use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::BookMatchDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByAuthorCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksByAuthorCommandRequest {
    pub(crate) author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksByAuthorCommandResponse {
    pub books: Vec<BookMatchDto>,
}

impl FindBooksByAuthorCommandResponse {
    pub fn new(books: Vec<BookMatchDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand {
    async fn execute(&self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        let res = self.catalog_service.find_books_by_author(req.author.as_str())
            .await.map_err(CommandError::from).map(FindBooksByAuthorCommandResponse::new);
        if let Ok(found) = &res {
            info!(author = req.author.as_str(), count = found.books.len(), "books found by author");
        }
        res
    }
}
