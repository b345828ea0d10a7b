use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::SharedStore;
use routes::{activities, export, students};

pub mod extract;
pub mod routes;

pub const LANDING_PAGE: &str = "/static/index.html";

/// Full application router. `static_dir` is mounted under `/static`.
pub fn router(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        // Activities
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        // Students
        .route(
            "/students",
            get(students::list_students_handler).post(students::create_student_handler),
        )
        .route("/students/export/csv", get(export::export_students_csv_handler))
        .route(
            "/students/:email",
            get(students::get_student_handler)
                .put(students::update_student_handler)
                .delete(students::delete_student_handler),
        )
        .route(
            "/students/:email/activities",
            get(students::student_activities_handler),
        )
        // Static files
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        // State
        .with_state(store)
}
