use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::server::AppState;
use crate::reference::{CreateReference, Reference, ReferenceFilter, ReferenceInput, UpdateReference};
use crate::storage::SqliteStore;
use crate::Error;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: Error) -> ApiError {
    let status = match &err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Storage(_) | Error::Io(_) => {
            tracing::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

/// Keep malformed or mistyped bodies in the same `{"error": ...}` shape as other failures
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        (rejection.status(), Json(ErrorResponse { error: rejection.body_text() }))
    })
}

/// Run one store operation on a blocking thread with a fresh connection.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&SqliteStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let path = state.database_path.clone();
    tokio::task::spawn_blocking(move || {
        let store = SqliteStore::open(&path)?;
        op(&store)
    })
    .await
    .map_err(|e| {
        tracing::error!("Store task failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
    })?
    .map_err(api_error)
}

pub async fn list_references(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Reference>>, ApiError> {
    let filter = ReferenceFilter::new(params.search, params.category);
    let references = with_store(&state, move |store| store.list(&filter)).await?;
    Ok(Json(references))
}

pub async fn create_reference(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ReferenceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let request = CreateReference::try_from(json_body(body)?).map_err(api_error)?;
    let id = with_store(&state, move |store| store.create(&request)).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Reference created" })),
    ))
}

pub async fn get_reference(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Reference>, ApiError> {
    let reference = with_store(&state, move |store| store.get(id)).await?;
    Ok(Json(reference))
}

pub async fn update_reference(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<ReferenceInput>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let update = UpdateReference::from(json_body(body)?);
    with_store(&state, move |store| store.update(id, &update)).await?;
    Ok(Json(json!({ "message": "Reference updated" })))
}

pub async fn delete_reference(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    with_store(&state, move |store| store.delete(id)).await?;
    Ok(Json(json!({ "message": "Reference deleted" })))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let categories = with_store(&state, |store| store.list_categories()).await?;
    Ok(Json(categories))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
