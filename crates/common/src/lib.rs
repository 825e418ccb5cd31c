//! Shared types for the forms service.
//!
//! - [`FieldError`] and [`ValidationErrors`] carry per-field validation failures
//! - [`text`] accepts loosely-typed form values as optional text

pub mod text;
pub mod types;

pub use types::{FieldError, ValidationErrors};
