use axum::{
    extract::{Path, State},
    Json,
};
use indexmap::IndexMap;
use serde::Serialize;

use crate::database::SharedStore;
use crate::error::ApiError;
use crate::models::{StudentRow, StudentUpdate};
use crate::services::students_service::{self, StudentActivityView, StudentsQuery};
use crate::web::extract::{ApiJson, ApiQuery};
use crate::web::routes::activities::MessageResponse;

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub message: String,
    pub student: StudentRow,
}

pub async fn list_students_handler(
    ApiQuery(query): ApiQuery<StudentsQuery>,
    State(store): State<SharedStore>,
) -> Json<IndexMap<String, StudentRow>> {
    Json(students_service::list_students(&store, &query))
}

pub async fn create_student_handler(
    State(store): State<SharedStore>,
    ApiJson(body): ApiJson<StudentRow>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = students_service::create_student(&store, body)?;
    Ok(Json(StudentResponse {
        message: "Student created successfully".to_string(),
        student,
    }))
}

pub async fn get_student_handler(
    Path(email): Path<String>,
    State(store): State<SharedStore>,
) -> Result<Json<StudentRow>, ApiError> {
    students_service::get_student(&store, &email).map(Json)
}

pub async fn update_student_handler(
    Path(email): Path<String>,
    State(store): State<SharedStore>,
    ApiJson(body): ApiJson<StudentUpdate>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = students_service::update_student(&store, &email, body)?;
    Ok(Json(StudentResponse {
        message: "Student updated successfully".to_string(),
        student,
    }))
}

pub async fn delete_student_handler(
    Path(email): Path<String>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    students_service::delete_student(&store, &email)?;
    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}

pub async fn student_activities_handler(
    Path(email): Path<String>,
    State(store): State<SharedStore>,
) -> Result<Json<Vec<StudentActivityView>>, ApiError> {
    students_service::list_student_activities(&store, &email).map(Json)
}
