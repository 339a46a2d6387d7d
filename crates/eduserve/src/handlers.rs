//! HTTP handlers for the generation endpoints

use axum::{extract::State, Json, Router};
use educore::ContentGenerator;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ApiResult;

/// Bounds applied to the question count, same as the tool surface advertises
const MIN_QUESTIONS: usize = 1;
const MAX_QUESTIONS: usize = 20;

/// Default question count when the request body omits it
fn default_num_questions() -> usize {
    5
}

/// Default difficulty when the request body omits it
fn default_difficulty() -> String {
    "medium".to_string()
}

/// Default grade level when the request body omits it
fn default_grade_level() -> String {
    "middle school".to_string()
}

/// Default duration when the request body omits it
fn default_duration() -> String {
    "1 hour".to_string()
}

/// Request body for POST /tools/generate_mcqs
#[derive(Debug, Deserialize)]
pub struct McqRequest {
    /// Topic to generate questions for
    pub topic: String,

    /// Number of questions to generate
    #[serde(default = "default_num_questions")]
    pub num_questions: usize,

    /// Difficulty hint
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

/// Request body for POST /resources/get_lesson_plan
#[derive(Debug, Deserialize)]
pub struct LessonPlanRequest {
    /// Subject to plan a lesson for
    pub subject: String,

    /// Target grade level
    #[serde(default = "default_grade_level")]
    pub grade_level: String,

    /// Planned duration
    #[serde(default = "default_duration")]
    pub duration: String,
}

/// State shared across all handlers
///
/// The generator is stateless across calls, so handlers share one instance
/// behind an `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Shared content generator
    pub generator: Arc<ContentGenerator>,

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState instance with generator and configuration
    pub fn new(generator: Arc<ContentGenerator>, config: ServerConfig) -> Self {
        Self {
            generator,
            config: Arc::new(config),
        }
    }
}

/// POST /tools/generate_mcqs - Generate multiple-choice questions
pub async fn generate_mcqs(
    State(state): State<AppState>,
    Json(request): Json<McqRequest>,
) -> ApiResult<Json<Value>> {
    let count = request.num_questions.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
    info!(
        "Generating {} MCQs for topic '{}' (difficulty: {})",
        count, request.topic, request.difficulty
    );

    let set = state
        .generator
        .generate_mcqs(&request.topic, count, &request.difficulty)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "questions": set.questions,
    })))
}

/// POST /resources/get_lesson_plan - Generate a lesson plan
pub async fn get_lesson_plan(
    State(state): State<AppState>,
    Json(request): Json<LessonPlanRequest>,
) -> ApiResult<Json<Value>> {
    info!(
        "Generating lesson plan for subject '{}' ({}, {})",
        request.subject, request.grade_level, request.duration
    );

    let plan = state.generator.generate_lesson_plan(
        &request.subject,
        &request.grade_level,
        &request.duration,
    )?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "lesson_plan": plan,
    })))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(_state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(serde_json::json!({
        "status": "ok",
        "service": "eduserve",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Create router with all API endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/tools/generate_mcqs", axum::routing::post(generate_mcqs))
        .route(
            "/resources/get_lesson_plan",
            axum::routing::post(get_lesson_plan),
        )
}
