//! Student handlers: index, store, show, edit, update.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::model::StudentInput;
use crate::response::{
    message_ok, student_ok, students_ok, ErrorsBody, MessageBody, StudentBody, StudentListBody,
};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub const CREATED_MESSAGE: &str = "Record has Created Successfully";
pub const UPDATED_MESSAGE: &str = "Record has Updated Successfully";

/// Ids that do not parse as integers cannot match a record.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(id_str.to_string()))
}

/// Get all students.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    operation_id = "index",
    responses(
        (status = 200, description = "Successful operation", body = StudentListBody),
        (status = 404, description = "No records", body = MessageBody),
    )
)]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = StudentService::list(state.store.as_ref()).await?;
    Ok(students_ok(rows))
}

/// Add a new record to the store.
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    operation_id = "store",
    request_body(content = StudentInput, description = "Record Add"),
    responses(
        (status = 200, description = "Record created", body = MessageBody),
        (status = 422, description = "Validation exception", body = ErrorsBody),
        (status = 500, description = "Persistence failure", body = MessageBody),
    )
)]
pub async fn store(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let fields = StudentService::validate(&body)?;
    StudentService::create(state.store.as_ref(), state.clock.as_ref(), &fields).await?;
    Ok(message_ok(CREATED_MESSAGE))
}

/// Display a particular record.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    operation_id = "show",
    params(
        ("id" = i64, Path, description = "ID of the record that needs to be fetched", example = 1)
    ),
    responses(
        (status = 200, description = "Successful Operation", body = StudentBody),
        (status = 404, description = "Record not found", body = MessageBody),
    )
)]
pub async fn show(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = StudentService::read(state.store.as_ref(), id).await?;
    Ok(student_ok(row))
}

/// Display a particular record to edit. Same lookup as `show`.
#[utoipa::path(
    get,
    path = "/api/students/{id}/edit",
    tag = "students",
    operation_id = "edit",
    params(
        ("id" = i64, Path, description = "ID of the record that needs to be fetched for edit", example = 1)
    ),
    responses(
        (status = 200, description = "Successful Record Operation", body = StudentBody),
        (status = 404, description = "Record not found", body = MessageBody),
    )
)]
pub async fn edit(state: State<AppState>, id: Path<String>) -> Result<impl IntoResponse, AppError> {
    show(state, id).await
}

/// Update an existing student record.
#[utoipa::path(
    put,
    path = "/api/students/{id}/edit",
    tag = "students",
    operation_id = "update",
    params(
        ("id" = i64, Path, description = "ID of the student record to be updated", example = 1)
    ),
    request_body(content = StudentInput, description = "Record data to update"),
    responses(
        (status = 200, description = "Record updated successfully", body = MessageBody),
        (status = 404, description = "Record not found", body = MessageBody),
        (status = 422, description = "Validation exception", body = ErrorsBody),
        (status = 500, description = "Persistence failure", body = MessageBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let fields = StudentService::validate(&body)?;
    let id = parse_id(&id_str)?;
    StudentService::update(state.store.as_ref(), state.clock.as_ref(), id, &fields).await?;
    Ok(message_ok(UPDATED_MESSAGE))
}
