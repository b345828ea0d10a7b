use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Local;
use tracing::info;

use crate::database::SharedStore;
use crate::error::ApiError;
use crate::services::export_service;

pub async fn export_students_csv_handler(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let body = export_service::render_students_csv(&store)?;
    let filename = export_service::export_filename(Local::now().naive_local());
    info!(filename = %filename, bytes = body.len(), "student export rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    ))
}
