use axum::{
    extract::{Path, State},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::database::SharedStore;
use crate::error::ApiError;
use crate::models::ActivityRow;
use crate::services::activities_service;
use crate::web::extract::ApiQuery;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(store): State<SharedStore>,
) -> Json<IndexMap<String, ActivityRow>> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    ApiQuery(query): ApiQuery<EmailQuery>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = activities_service::signup(&store, &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    ApiQuery(query): ApiQuery<EmailQuery>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = activities_service::unregister(&store, &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}
