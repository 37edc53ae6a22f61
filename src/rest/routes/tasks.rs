// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::store::{StoreError, Task};
use crate::AppContext;

/// Map a store failure to its HTTP status. The error `Display` text goes
/// out verbatim as the plain-text body.
fn error_response(err: StoreError) -> (StatusCode, String) {
    let status = match err {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::InvalidName => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    let store = ctx.store.read().await;
    Json(store.list().to_vec())
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let store = ctx.store.read().await;
    match store.get(id) {
        Ok(task) => Ok(Json(task.clone())),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    /// Absent name fails validation with the same message as a short one.
    pub name: Option<String>,
    pub completed: Option<bool>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    let mut store = ctx.store.write().await;
    match store.create(body.name, body.completed) {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
pub struct ReplaceTaskRequest {
    pub name: Option<String>,
    pub completed: bool,
}

pub async fn replace_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(body): Json<ReplaceTaskRequest>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let mut store = ctx.store.write().await;
    match store.replace(id, body.name, body.completed) {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

#[derive(Deserialize)]
pub struct PatchTaskRequest {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

pub async fn patch_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(body): Json<PatchTaskRequest>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let mut store = ctx.store.write().await;
    match store.patch(id, body.name, body.completed) {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, (StatusCode, String)> {
    let mut store = ctx.store.write().await;
    match store.remove(id) {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}
