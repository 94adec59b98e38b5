use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use corretor::error::AppError;
use corretor::grading::{
    themes, BasicValidation, CompetencyFeedback, CompetencyScores, GradingEngine,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CorrigirRequest {
    #[serde(default)]
    pub(crate) texto: Option<String>,
    #[serde(default)]
    pub(crate) tema: Option<String>,
    #[serde(default)]
    pub(crate) user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CorrigirResponse {
    pub(crate) success: bool,
    #[serde(rename = "competencias")]
    pub(crate) scores: CompetencyScores,
    pub(crate) total: u16,
    pub(crate) feedback: CompetencyFeedback,
    pub(crate) tags: Vec<String>,
    #[serde(rename = "pontos_fortes")]
    pub(crate) strengths: Vec<String>,
    #[serde(rename = "pontos_fracos")]
    pub(crate) weaknesses: Vec<String>,
    #[serde(rename = "validacao_basica")]
    pub(crate) validation: BasicValidation,
}

#[derive(Debug, Serialize)]
pub(crate) struct GerarTemaResponse {
    pub(crate) success: bool,
    pub(crate) tema: &'static str,
    pub(crate) temas_disponiveis: Vec<&'static str>,
}

pub(crate) fn with_grading_routes(engine: Arc<GradingEngine>) -> axum::Router {
    axum::Router::new()
        .route("/corrigir", axum::routing::post(corrigir_endpoint))
        .route("/gerar-tema", axum::routing::get(gerar_tema_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn corrigir_endpoint(
    Extension(engine): Extension<Arc<GradingEngine>>,
    Json(payload): Json<CorrigirRequest>,
) -> Result<Json<CorrigirResponse>, AppError> {
    let CorrigirRequest {
        texto,
        tema,
        user_id,
    } = payload;

    let texto = texto.filter(|t| !t.is_empty());
    let user_id = user_id.filter(|u| !u.is_empty());
    let (texto, _user_id) = match (texto, user_id) {
        (Some(texto), Some(user_id)) => (texto, user_id),
        _ => return Err(AppError::validation("Texto e user_id são obrigatórios")),
    };

    // A blank theme means free-form grading; the topic check is skipped
    // rather than run against a placeholder string.
    let tema = tema.map(|t| t.trim().to_string()).unwrap_or_default();

    let evaluation = engine.grade(&texto, &tema);

    Ok(Json(CorrigirResponse {
        success: true,
        scores: evaluation.scores,
        total: evaluation.total,
        feedback: evaluation.feedback,
        tags: evaluation.tags,
        strengths: evaluation.strengths,
        weaknesses: evaluation.weaknesses,
        validation: evaluation.validation,
    }))
}

pub(crate) async fn gerar_tema_endpoint() -> Json<GerarTemaResponse> {
    Json(GerarTemaResponse {
        success: true,
        tema: themes::random_theme(),
        temas_disponiveis: themes::THEMES.to_vec(),
    })
}
