// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod session_store;
pub mod sqlite_repository;
pub mod templates;
