// Application layer
// Orchestrates domain validation and repository units of work

pub mod developer_service;
pub mod dto;

pub use developer_service::DeveloperService;
