//! HTTP surface: the patient form, its submission, and a JSON API

pub mod render;

use crate::analyzer::Analyzer;
use crate::config::DisplayConfig;
use crate::metrics::MetricsSnapshot;
use crate::types::patient::PatientInput;
use crate::types::prediction::PredictionReport;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub display: Arc<DisplayConfig>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, display: DisplayConfig) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            display: Arc::new(display),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    pub models: Vec<String>,
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
}

/// Error surfaced to the client as a generic failure
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "Returning generic failure response");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Prediction failed. Please try again.",
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::render_page(
        &PatientInput::default(),
        None,
        &state.display,
    ))
}

async fn predict_form(
    State(state): State<AppState>,
    Form(input): Form<PatientInput>,
) -> Result<Html<String>, AppError> {
    let report = state.analyzer.analyze(&input)?;
    Ok(Html(render::render_page(
        &report.input,
        Some(&report.display),
        &state.display,
    )))
}

async fn predict_json(
    State(state): State<AppState>,
    Json(input): Json<PatientInput>,
) -> Result<Json<PredictionReport>, AppError> {
    Ok(Json(state.analyzer.analyze(&input)?))
}

async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Pre-Surgery Analyzer is alive".into(),
        models: state.analyzer.registry().model_names(),
        metrics: state.analyzer.metrics().snapshot(),
    })
}
