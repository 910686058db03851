use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Reviews;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetReviewsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetReviewsCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetReviewsCommandRequest {
    pub(crate) isbn: String,
}

impl GetReviewsCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetReviewsCommandResponse {
    pub reviews: Reviews,
}

impl GetReviewsCommandResponse {
    pub fn new(reviews: Reviews) -> Self {
        Self {
            reviews,
        }
    }
}

#[async_trait]
impl Command<GetReviewsCommandRequest, GetReviewsCommandResponse> for GetReviewsCommand {
    async fn execute(&self, req: GetReviewsCommandRequest) -> Result<GetReviewsCommandResponse, CommandError> {
        self.catalog_service.find_reviews_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetReviewsCommandResponse::new)
    }
}
