//! Name handlers
//!
//! Endpoints for listing and submitting names.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::NameEntry;
use crate::error::AppError;
use crate::AppState;

/// Request body for name submission: `{ "name": string }`
///
/// Held as raw JSON. A missing field, a non-string `name` and a body that is
/// not an object must all produce the same 400 as a blank name.
#[derive(Debug)]
pub struct AddNameRequest(pub Value);

impl AddNameRequest {
    /// The submitted name if the body is an object whose `name` is a string
    pub fn name_str(&self) -> Option<&str> {
        self.0
            .as_object()
            .and_then(|body| body.get("name"))
            .and_then(Value::as_str)
    }
}

/// Response body for name submission
#[derive(Debug, Serialize, Deserialize)]
pub struct AddNameResponse {
    pub success: bool,
    /// The stored (trimmed) name
    pub name: String,
    /// Number of names after this submission
    pub total: usize,
}

/// Response body for the name listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ListNamesResponse {
    pub names: Vec<NameEntry>,
}

/// GET /api/names
///
/// All submitted names, oldest first.
pub async fn list_names(
    State(state): State<AppState>,
) -> Result<Json<ListNamesResponse>, AppError> {
    let names = state.name_service.list_names().await?;
    Ok(Json(ListNamesResponse { names }))
}

/// POST /api/names
///
/// Trim and append a name. Responds 400 when the name is missing, not a
/// string, or blank.
pub async fn add_name(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AddNameResponse>, AppError> {
    let Json(body) = payload?;
    let request = AddNameRequest(body);

    let added = state.name_service.add_name(request.name_str()).await?;

    Ok(Json(AddNameResponse {
        success: true,
        name: added.name.into_inner(),
        total: added.total,
    }))
}
