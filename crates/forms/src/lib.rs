//! Form validation for the academic scheduling application.
//!
//! This crate provides:
//! - The [`Form`] trait shared by every validator
//! - Classroom, learning-type, and academic-year validators
//! - A [`Messages`] catalog holding every user-facing error string
//!
//! Validators never stop at the first problem: each field is checked
//! independently and all failures are returned together.

pub mod academic_year;
pub mod classroom;
mod coerce;
pub mod error;
pub mod form;
pub mod learning_type;
pub mod messages;

pub use academic_year::{AcademicYear, AcademicYearForm, AcademicYearInput, MIN_YEAR};
pub use classroom::{Classroom, ClassroomForm, ClassroomInput};
pub use common::{FieldError, ValidationErrors};
pub use error::FormsError;
pub use form::{Form, validate};
pub use learning_type::{
    LearningCycle, LearningType, LearningTypeForm, LearningTypeInput, UnknownLearningCycle,
};
pub use messages::Messages;
