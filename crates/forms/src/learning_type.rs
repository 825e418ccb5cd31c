//! Learning-type form.

use std::str::FromStr;

use common::ValidationErrors;
use common::text::lenient;
use serde::{Deserialize, Serialize};

use crate::form::Form;
use crate::messages::Messages;

/// Wire names of the learning-type fields.
pub mod field {
    pub const LEARNING_CYCLE: &str = "learningCycle";
}

/// Study cycle a learning type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningCycle {
    /// Bachelor's studies.
    Licenta,
    /// Master's studies.
    Master,
}

impl LearningCycle {
    /// Every accepted cycle.
    pub const ALL: [LearningCycle; 2] = [LearningCycle::Licenta, LearningCycle::Master];

    /// Returns the wire form of the cycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningCycle::Licenta => "Licenta",
            LearningCycle::Master => "Master",
        }
    }
}

impl std::fmt::Display for LearningCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`LearningCycle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown learning cycle: {0:?}")]
pub struct UnknownLearningCycle(pub String);

impl FromStr for LearningCycle {
    type Err = UnknownLearningCycle;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LearningCycle::ALL
            .into_iter()
            .find(|cycle| cycle.as_str() == s)
            .ok_or_else(|| UnknownLearningCycle(s.to_string()))
    }
}

/// Raw learning-type submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningTypeInput {
    #[serde(default, deserialize_with = "lenient")]
    pub learning_cycle: Option<String>,
}

/// A validated learning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningType {
    pub learning_cycle: LearningCycle,
}

/// Validator for [`LearningTypeInput`].
pub struct LearningTypeForm;

impl Form for LearningTypeForm {
    const NAME: &'static str = "learning_type";
    type Input = LearningTypeInput;
    type Output = LearningType;

    fn validate(
        input: &LearningTypeInput,
        messages: &Messages,
    ) -> Result<LearningType, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let cycle = input
            .learning_cycle
            .as_deref()
            .and_then(|raw| raw.parse::<LearningCycle>().ok());
        if cycle.is_none() {
            errors.push(field::LEARNING_CYCLE, &messages.learning_cycle_invalid);
        }

        errors.into_result(|| LearningType {
            learning_cycle: cycle.unwrap_or(LearningCycle::Licenta),
        })
    }
}
