//! Route handlers.

pub mod cache;
pub mod dashboard;
pub mod weather;
