//! Academic-year form.

use common::ValidationErrors;
use common::text::lenient;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::form::Form;
use crate::messages::Messages;

/// Earliest accepted year for either bound.
pub const MIN_YEAR: i32 = 2000;

/// Wire names of the academic-year fields.
pub mod field {
    pub const START: &str = "start";
    pub const END: &str = "end";
}

/// Raw academic-year submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AcademicYearInput {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<String>,
}

/// A validated academic year.
///
/// `end` is not required to be after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub start: i32,
    pub end: i32,
}

/// Validator for [`AcademicYearInput`].
pub struct AcademicYearForm;

impl Form for AcademicYearForm {
    const NAME: &'static str = "academic_year";
    type Input = AcademicYearInput;
    type Output = AcademicYear;

    fn validate(
        input: &AcademicYearInput,
        messages: &Messages,
    ) -> Result<AcademicYear, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let start = year(input.start.as_ref());
        if start.is_none() {
            errors.push(field::START, &messages.start_invalid);
        }

        let end = year(input.end.as_ref());
        if end.is_none() {
            errors.push(field::END, &messages.end_invalid);
        }

        errors.into_result(|| AcademicYear {
            start: start.unwrap_or(MIN_YEAR),
            end: end.unwrap_or(MIN_YEAR),
        })
    }
}

fn year(raw: Option<&String>) -> Option<i32> {
    coerce::present(raw)
        .and_then(coerce::integer::<i32>)
        .filter(|y| *y >= MIN_YEAR)
}
