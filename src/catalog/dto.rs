use serde::{Deserialize, Serialize};
use crate::books::dto::BookMatchDto;

pub(crate) const AUTHOR_SUGGESTION: &str = "Check the author name or try a different search term";
pub(crate) const TITLE_SUGGESTION: &str = "Check the title spelling or try a different search term";

// envelope of a deferred author search
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthorSearchDto {
    pub success: bool,
    pub count: usize,
    pub data: Vec<BookMatchDto>,
}

impl AuthorSearchDto {
    pub fn new(data: Vec<BookMatchDto>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

// envelope of a deferred title search
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct TitleSearchDto {
    pub success: bool,
    pub message: String,
    pub data: Vec<BookMatchDto>,
}

impl TitleSearchDto {
    pub fn new(data: Vec<BookMatchDto>) -> Self {
        Self {
            success: true,
            message: format!("{} book(s) found", data.len()),
            data,
        }
    }
}

// failure envelope shared by the deferred searches
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct SearchFailureDto {
    pub success: bool,
    pub message: String,
    pub suggestion: String,
}

impl SearchFailureDto {
    pub fn new(message: &str, suggestion: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}
