use std::env;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by in-memory records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;

    // value of a named attribute, used to evaluate query predicates
    fn attribute(&self, name: &str) -> Option<&str>;
}

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

// Configuration abstracts config options for the bookstore
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub listen_addr: String,
    pub books_file: Option<String>,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            books_file: None,
        }
    }

    // builds config from BOOKSTORE_* environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let branch = env::var("BOOKSTORE_BRANCH").unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Ok(addr) = env::var("BOOKSTORE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        config.books_file = env::var("BOOKSTORE_BOOKS_FILE").ok().filter(|path| !path.is_empty());
        config
    }

    pub fn store(&self) -> RepositoryStore {
        match &self.books_file {
            Some(path) => RepositoryStore::File(path.to_string()),
            None => RepositoryStore::Bundled,
        }
    }
}
