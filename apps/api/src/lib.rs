//! DMaker API Library
//!
//! This library provides the core functionality for the DMaker developer
//! records API, including domain logic, the application service, repositories
//! and the HTTP layer.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
