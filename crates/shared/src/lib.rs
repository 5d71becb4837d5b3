//! Shared errors, configuration, and tracing bootstrap for Centum.
//!
//! This crate provides the ambient pieces used by the other crates:
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
