//! Core types and shared functionality for weather8.
//!
//! This crate provides:
//! - The in-process TTL cache for upstream payloads
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStore, DEFAULT_TTL};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
