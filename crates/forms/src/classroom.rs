//! Classroom form.

use common::ValidationErrors;
use common::text::lenient;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::form::Form;
use crate::messages::Messages;

/// Wire names of the classroom fields.
pub mod field {
    pub const NAME: &str = "name";
    pub const CAPACITY: &str = "capacity";
}

/// Raw classroom submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassroomInput {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub building: Option<String>,
}

/// A validated classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub name: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

/// Validator for [`ClassroomInput`].
///
/// - `name` must be present and non-empty
/// - `capacity` defaults to 0 when absent or empty, otherwise must be a
///   non-negative base-10 integer
/// - `building` is passed through unchanged
pub struct ClassroomForm;

impl Form for ClassroomForm {
    const NAME: &'static str = "classroom";
    type Input = ClassroomInput;
    type Output = Classroom;

    fn validate(
        input: &ClassroomInput,
        messages: &Messages,
    ) -> Result<Classroom, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = coerce::present(input.name.as_ref());
        if name.is_none() {
            errors.push(field::NAME, &messages.name_required);
        }

        let capacity = match coerce::present(input.capacity.as_ref()) {
            None => Some(0),
            Some(raw) => coerce::integer::<i64>(raw).and_then(|n| u32::try_from(n).ok()),
        };
        if capacity.is_none() {
            errors.push(field::CAPACITY, &messages.capacity_invalid);
        }

        errors.into_result(|| Classroom {
            name: name.unwrap_or_default().to_string(),
            capacity: capacity.unwrap_or_default(),
            building: input.building.clone(),
        })
    }
}
