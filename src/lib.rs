pub mod books {
    pub mod domain {
        pub mod model;
    }
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod find_books_by_author_cmd;
        pub mod find_books_by_title_cmd;
        pub mod get_book_cmd;
        pub mod get_reviews_cmd;
        pub mod list_books_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod dto;
    pub mod factory;
}

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod gateway;
pub mod server;
pub mod users;

pub mod utils {
    pub mod date;
    pub mod logging;
}
