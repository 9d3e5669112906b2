//! HTTP and runtime plumbing shared by Filmorate binaries.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
