//! Servidor web Axum que recebe um documento e suas tags de NER (produzidas
//! por um motor externo) e devolve os spans localizados no texto original.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use scrub_core::{AnnotatedToken, EntityDetector, FilthSpan, IgnoredWords};

/// Qual preset de tabela categoria → tipo usar para as tags recebidas.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Engine {
    #[default]
    Stanford,
    Stanza,
    Corenlp,
}

#[derive(Deserialize)]
struct ScrubRequest {
    text: String,
    /// Tags na ordem do documento, como o motor externo as produziu.
    tags: Vec<AnnotatedToken>,
    #[serde(default)]
    engine: Engine,
    #[serde(default)]
    document_name: Option<String>,
    /// Habilita a categoria de local (desabilitada por padrão nos presets).
    #[serde(default)]
    enable_location: bool,
    /// Lista de palavras ignoradas; ausente = padrão ("tennant").
    #[serde(default)]
    ignored_words: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ScrubResponse {
    spans: Vec<FilthSpan>,
    total_spans: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/scrub", post(scrub_handler))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Servidor scrub iniciado em http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// Localiza os spans das entidades anotadas no texto original.
async fn scrub_handler(Json(req): Json<ScrubRequest>) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response();
    }

    let mut detector = match req.engine {
        Engine::Stanford => EntityDetector::stanford(),
        Engine::Stanza => EntityDetector::stanza(),
        Engine::Corenlp => EntityDetector::corenlp(),
    };
    if req.enable_location {
        detector = detector.with_location();
    }
    if let Some(words) = &req.ignored_words {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        detector = detector.with_ignored_words(IgnoredWords::from_list(&refs));
    }

    match detector.detect(&req.text, &req.tags, req.document_name.as_deref()) {
        Ok(mut spans) => {
            spans.sort_by_key(|s| (s.start, s.end));
            let total_spans = spans.len();
            Json(ScrubResponse { spans, total_spans }).into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": err.to_string()})),
        )
            .into_response(),
    }
}
