//! OpenAPI document for the student routes.

use crate::handlers::student;
use crate::model::{Student, StudentInput};
use crate::response::{ErrorsBody, MessageBody, StudentBody, StudentListBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Records API", description = "Create, list, show and update student records."),
    paths(student::index, student::store, student::show, student::edit, student::update),
    components(schemas(Student, StudentInput, StudentListBody, StudentBody, MessageBody, ErrorsBody)),
    tags((name = "students", description = "Student records"))
)]
pub struct ApiDoc;
