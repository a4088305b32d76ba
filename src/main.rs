use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{
    buffer::BufferLayer,
    limit::RateLimitLayer,
    load_shed::{error::Overloaded, LoadShedLayer},
    ServiceBuilder,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    drafts::store::DraftStore,
    gemini::{
        client::{config::Config, gemini_client::GeminiClient},
        gateway::ModelGateway,
    },
};

mod app;
mod comics;
mod drafts;
mod gemini;

// A full page of base64 image data has to fit.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
    pub drafts: DraftStore,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // model gateway
    let gemini_client = match GeminiClient::new(Config::from_envy(&envy), None) {
        Ok(client) => client,
        Err(e) => panic!("{}", e.message),
    };

    tracing::info!(
        text_model = envy.text_model(),
        image_model = envy.image_model(),
        "model gateway ready"
    );

    let port = envy.port.to_owned().unwrap_or(3000);

    let state = AppState {
        gateway: Arc::new(gemini_client),
        drafts: DraftStore::new(envy.drafts_dir()),
        envy: Arc::new(envy),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
    {
        tracing::error!(%e, "server stopped");
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::PUT, Method::DELETE]);

    let rate_limit = state.envy.rate_limit_per_sec();
    let queue_size = state.envy.request_queue_size();

    let proxy = post(comics::controller::handle_action).fallback(app::controller::method_not_allowed);

    Router::new()
        .route("/", get(app::controller::get_root))
        // proxy
        .route("/api", proxy.clone())
        .route("/api/", proxy)
        // comics
        .route("/comics", post(comics::controller::create_comic))
        .route(
            "/comics/download",
            post(comics::controller::download_comic_page),
        )
        .route("/stories", post(comics::controller::draft_story))
        // drafts
        .route(
            "/drafts",
            get(drafts::controller::get_draft)
                .put(drafts::controller::save_draft)
                .delete(drafts::controller::clear_draft),
        )
        .fallback(app::controller::not_found)
        .with_state(state)
        // layers
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(LoadShedLayer::new())
                .layer(BufferLayer::new(queue_size))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<Overloaded>() {
        tracing::warn!("request shed, queue is full");
        return DefaultApiError::TooManyRequests.value();
    }

    tracing::error!(%err, "service layer failed");
    DefaultApiError::InternalServerError.value()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::Value;

    use crate::{app::testing::send, gemini::fake_gateway::FakeGateway};

    use super::*;

    #[tokio::test]
    async fn root_is_alive() {
        let (_dir, state) = app::testing::test_state(Arc::new(FakeGateway::new()));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["app_env"], "test");
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let (_dir, state) = app::testing::test_state(Arc::new(FakeGateway::new()));
        let request = Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router(state), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn trailing_slash_reaches_proxy() {
        let (_dir, state) = app::testing::test_state(Arc::new(FakeGateway::new()));
        let request = app::testing::post_json(
            "/api/",
            serde_json::json!({ "action": "translateToEnglish", "payload": { "text": "   " } }),
        );

        let (status, body) = send(router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "   ");
    }

    #[tokio::test]
    async fn burst_beyond_queue_is_too_many_requests() {
        let (_dir, mut state) = app::testing::test_state(Arc::new(FakeGateway::new()));
        let mut envy = (*state.envy).clone();
        envy.rate_limit_per_sec = Some(1);
        envy.request_queue_size = Some(1);
        state.envy = Arc::new(envy);
        let app = router(state);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let request = Request::builder().uri("/").body(Body::empty()).unwrap();
                tokio::spawn(send(app.clone(), request))
            })
            .collect();

        let mut responses: Vec<(StatusCode, Value)> = Vec::new();
        for handle in handles {
            responses.push(handle.await.unwrap());
        }

        let ok = responses
            .iter()
            .filter(|(status, _)| *status == StatusCode::OK)
            .count();
        let shed: Vec<_> = responses
            .iter()
            .filter(|(status, _)| *status == StatusCode::TOO_MANY_REQUESTS)
            .collect();

        assert!(ok >= 1);
        assert!(!shed.is_empty());
        assert_eq!(ok + shed.len(), 8);
        assert_eq!(shed[0].1["error"], "Too many requests, slow down.");
    }

    #[tokio::test]
    async fn other_layer_failures_are_internal_errors() {
        let error = handle_layer_error("worker gone".into()).await;

        assert_eq!(error, DefaultApiError::InternalServerError.value());

        let error = handle_layer_error(Box::new(Overloaded::new())).await;

        assert_eq!(error, DefaultApiError::TooManyRequests.value());
    }
}
