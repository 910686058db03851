use indexmap::IndexMap;
use crate::core::domain::Identifiable;

// Reviews maps a reviewer identifier to the review text, in the order reviews were added.
pub(crate) type Reviews = IndexMap<String, String>;

// BookEntity abstracts a catalog entry. The isbn is the key of the catalog and is not
// part of the published book record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub author: String,
    pub title: String,
    pub reviews: Reviews,
}

impl BookEntity {
    pub fn new(isbn: &str, author: &str, title: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            author: author.to_string(),
            title: title.to_string(),
            reviews: Reviews::new(),
        }
    }

    pub fn with_review(mut self, reviewer: &str, review: &str) -> Self {
        self.reviews.insert(reviewer.to_string(), review.to_string());
        self
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "isbn" => Some(self.isbn.as_str()),
            "author" => Some(self.author.as_str()),
            "title" => Some(self.title.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "author", "title")
            .with_review("reader1", "great")
            .with_review("reader1", "still great");
        assert_eq!("isbn", book.id().as_str());
        assert_eq!(Some("author"), book.attribute("author"));
        assert_eq!(Some("title"), book.attribute("title"));
        assert_eq!(None, book.attribute("reviews"));
        assert_eq!(1, book.reviews.len());
        assert_eq!("still great", book.reviews["reader1"].as_str());
    }
}
