// Repository ports (interfaces implemented by the infrastructure layer)

pub mod developer_repository;

pub use developer_repository::{DeveloperRepository, DeveloperUnitOfWork};
