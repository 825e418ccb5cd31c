//! The contract shared by all validators.

use common::ValidationErrors;

use crate::messages::Messages;

/// A flat input record validated into a strongly-typed output.
///
/// Implementations work in two stages: every field is coerced and checked
/// on its own, with failures pushed into a [`ValidationErrors`] collector;
/// the output is built only when the collector stayed empty.
pub trait Form {
    /// Name used in logs and metric labels (e.g. `"classroom"`).
    const NAME: &'static str;

    /// Raw, text-typed input as submitted by the client.
    type Input;

    /// Normalized record produced on success.
    type Output;

    /// Validates `input`, reporting every violated rule.
    fn validate(
        input: &Self::Input,
        messages: &Messages,
    ) -> Result<Self::Output, ValidationErrors>;
}

/// Runs `F::validate` and records the outcome.
///
/// Emits a `form_validations_total{form, outcome}` counter and a debug log
/// line for rejected input.
#[tracing::instrument(skip_all, fields(form = F::NAME))]
pub fn validate<F: Form>(
    input: &F::Input,
    messages: &Messages,
) -> Result<F::Output, ValidationErrors> {
    let result = F::validate(input, messages);

    let outcome = match &result {
        Ok(_) => "valid",
        Err(errors) => {
            tracing::debug!(
                error_count = errors.len(),
                fields = ?errors.fields(),
                "form rejected"
            );
            "invalid"
        }
    };
    metrics::counter!("form_validations_total", "form" => F::NAME, "outcome" => outcome)
        .increment(1);

    result
}
