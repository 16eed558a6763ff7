// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_developer_repository;
pub mod postgres_developer_repository;

pub use in_memory_developer_repository::InMemoryDeveloperRepository;
pub use postgres_developer_repository::PostgresDeveloperRepository;
