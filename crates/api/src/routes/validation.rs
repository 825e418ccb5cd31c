//! Form validation endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use forms::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::AppState;
use crate::error::ApiError;

/// POST /{form}/validate: validates a raw submission for form `F`.
///
/// Responds 200 with the normalized record, 422 with every field error, or
/// 400 when the body is not a JSON object of text-like values.
#[tracing::instrument(skip_all, fields(form = F::NAME))]
pub async fn validate<F>(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<F::Input>, JsonRejection>,
) -> Result<Json<F::Output>, ApiError>
where
    F: Form + Send + 'static,
    F::Input: DeserializeOwned + Send + 'static,
    F::Output: Serialize + Send,
{
    let Json(input) = payload?;
    let output = forms::validate::<F>(&input, &state.messages)?;
    Ok(Json(output))
}
