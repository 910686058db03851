use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::BookMatchDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByTitleCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksByTitleCommandRequest {
    pub(crate) title: String,
}

impl FindBooksByTitleCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksByTitleCommandResponse {
    pub books: Vec<BookMatchDto>,
}

impl FindBooksByTitleCommandResponse {
    pub fn new(books: Vec<BookMatchDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksByTitleCommandRequest, FindBooksByTitleCommandResponse> for FindBooksByTitleCommand {
    async fn execute(&self, req: FindBooksByTitleCommandRequest) -> Result<FindBooksByTitleCommandResponse, CommandError> {
        let res = self.catalog_service.find_books_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(FindBooksByTitleCommandResponse::new);
        if let Ok(found) = &res {
            info!(title = req.title.as_str(), count = found.books.len(), "books found by title");
        }
        res
    }
}
