//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services like avatar providers.

pub mod gravatar;
