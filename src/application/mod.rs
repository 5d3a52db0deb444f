// Application layer - Use cases and the repository seam
pub mod credential_checker;
pub mod dashboard_service;
pub mod metrics_repository;
