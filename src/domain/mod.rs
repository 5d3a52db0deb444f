// Domain layer - Core models with no I/O
pub mod dashboard;
pub mod metrics;
pub mod session;
