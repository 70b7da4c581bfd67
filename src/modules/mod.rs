pub mod user {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod session;
    pub mod service;
}
pub mod course {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod service;
}
pub mod notification {
    pub mod schema;
    pub mod repository;
    pub mod repository_memory;
    pub mod service;
}
pub mod message {
    pub mod schema;
    pub mod repository;
    pub mod repository_memory;
    pub mod service;
}
pub mod conversation {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod service;
}
