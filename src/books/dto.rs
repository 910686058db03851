use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::{BookEntity, Reviews};

// BookDto is the published book record, keyed externally by isbn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub reviews: Reviews,
}

// BookMatchDto is a search hit, carrying the isbn alongside the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookMatchDto {
    pub isbn: String,
    pub author: String,
    pub title: String,
    pub reviews: Reviews,
}

// BookCatalogDto is the whole catalog keyed by isbn in catalog order
pub(crate) type BookCatalogDto = IndexMap<String, BookDto>;

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            author: other.author.to_string(),
            title: other.title.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}

impl From<&BookEntity> for BookMatchDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            author: other.author.to_string(),
            title: other.title.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}

impl BookEntity {
    pub(crate) fn from_dto(isbn: &str, other: &BookDto) -> Self {
        Self {
            isbn: isbn.to_string(),
            author: other.author.to_string(),
            title: other.title.to_string(),
            reviews: other.reviews.clone(),
        }
    }
}
