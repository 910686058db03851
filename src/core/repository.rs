use async_trait::async_trait;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // get an entity by its key
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // find entities whose attributes equal every predicate value, in store order
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;
}

// RepositoryStore defines where the book collection is loaded from
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) enum RepositoryStore {
    Bundled,
    File(String),
}

// exact-match evaluation of a query predicate; unknown attributes are rejected
pub(crate) fn matches_predicate<E: Identifiable>(entity: &E, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (name, expected) in predicate {
        match entity.attribute(name) {
            Some(actual) => {
                if actual != expected.as_str() {
                    return Ok(false);
                }
            }
            None => {
                return Err(LibraryError::validation(
                    format!("unsupported query attribute {}", name).as_str(), Some(name.to_string())));
            }
        }
    }
    Ok(true)
}
