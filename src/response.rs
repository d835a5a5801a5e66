//! Standard `{status, ...}` response envelopes.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::FieldErrors;
use crate::model::Student;

#[derive(Serialize, ToSchema)]
pub struct StudentListBody {
    #[schema(example = 200)]
    pub status: u16,
    pub students: Vec<Student>,
}

#[derive(Serialize, ToSchema)]
pub struct StudentBody {
    #[schema(example = 200)]
    pub status: u16,
    pub student: Student,
}

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub status: u16,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    #[schema(example = 422)]
    pub status: u16,
    /// Field name to messages.
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

pub fn students_ok(students: Vec<Student>) -> (StatusCode, Json<StudentListBody>) {
    (
        StatusCode::OK,
        Json(StudentListBody {
            status: StatusCode::OK.as_u16(),
            students,
        }),
    )
}

pub fn student_ok(student: Student) -> (StatusCode, Json<StudentBody>) {
    (
        StatusCode::OK,
        Json(StudentBody {
            status: StatusCode::OK.as_u16(),
            student,
        }),
    )
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            status: StatusCode::OK.as_u16(),
            message: message.to_string(),
        }),
    )
}
