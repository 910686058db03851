use std::sync::Arc;
use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub(crate) const BUNDLED_BOOKS: &str = include_str!("../../data/books.json");

pub(crate) async fn create_book_repository(store: &RepositoryStore) -> LibraryResult<Arc<dyn BookRepository>> {
    let repo = match store {
        RepositoryStore::Bundled => {
            MemoryBookRepository::from_json(BUNDLED_BOOKS)?
        }
        RepositoryStore::File(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            MemoryBookRepository::from_json(json.as_str())?
        }
    };
    info!(books = repo.len(), "loaded book catalog from {:?}", store);
    Ok(Arc::new(repo))
}
