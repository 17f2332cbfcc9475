use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::CandidateId;
use super::pipeline::ViewStateParts;
use super::service::CandidateDashboard;

/// Router builder exposing the candidate list, export, stats and lookup.
pub fn dashboard_router(dashboard: Arc<CandidateDashboard>) -> Router {
    Router::new()
        .route("/api/v1/candidates", get(list_handler))
        .route("/api/v1/candidates/export", get(export_handler))
        .route("/api/v1/candidates/stats", get(stats_handler))
        .route("/api/v1/candidates/:candidate_id", get(candidate_handler))
        .with_state(dashboard)
}

/// Query string accepted by the list and export endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateListQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl CandidateListQuery {
    fn parts(&self) -> ViewStateParts<'_> {
        ViewStateParts {
            search: self.search.as_deref(),
            department: self.department.as_deref(),
            status: self.status.as_deref(),
            sort: self.sort.as_deref(),
            direction: self.direction.as_deref(),
            page: self.page,
            page_size: self.page_size,
            ..ViewStateParts::default()
        }
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

pub(crate) async fn list_handler(
    State(dashboard): State<Arc<CandidateDashboard>>,
    Query(query): Query<CandidateListQuery>,
) -> Response {
    match dashboard.view_state(query.parts()) {
        Ok(state) => {
            let view = dashboard.view(&state);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => bad_request(error.to_string()),
    }
}

pub(crate) async fn export_handler(
    State(dashboard): State<Arc<CandidateDashboard>>,
    Query(query): Query<CandidateListQuery>,
) -> Response {
    let state = match dashboard.view_state(query.parts()) {
        Ok(state) => state,
        Err(error) => return bad_request(error.to_string()),
    };

    match dashboard.export(&state) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"candidates.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
        Err(error) => {
            warn!(%error, "candidate export failed");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn stats_handler(State(dashboard): State<Arc<CandidateDashboard>>) -> Response {
    (StatusCode::OK, axum::Json(dashboard.summary())).into_response()
}

pub(crate) async fn candidate_handler(
    State(dashboard): State<Arc<CandidateDashboard>>,
    Path(candidate_id): Path<u32>,
) -> Response {
    match dashboard.candidate(CandidateId(candidate_id)) {
        Some(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        None => {
            let payload = json!({
                "error": "candidate not found",
                "candidate_id": candidate_id,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
