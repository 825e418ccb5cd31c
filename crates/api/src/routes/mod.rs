//! HTTP route handlers.

pub mod metrics;
pub mod status;
pub mod validation;
