use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{BroadcastVocabFeed, PgVocabRepository};
use application::VocabService;
use auth::ApiKey;
use config::ServerConfig;
use lexicard::{DefinitionLookup, VocabFeed, VocabRepository};

/// Vocab service behind trait objects so routes run against any store
pub type AppVocabService = VocabService<dyn VocabRepository, dyn VocabFeed>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub vocab_service: Arc<AppVocabService>,
    pub lookup: Arc<DefinitionLookup>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Lexicard API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the full router; `/lexicard/*` sits behind bearer auth
fn build_router(state: AppState, api_key: ApiKey) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::vocab::router())
        .merge(routes::live::router())
        .merge(routes::lookup::router())
        .layer(middleware::from_fn_with_state(api_key, auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📇 Lexicard API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    let api_key = ApiKey::new(config.api_key.clone());
    if api_key.is_enabled() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No {} set - authentication disabled", config::API_KEY);
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    tracing::info!("✅ Database migrations completed");

    let lookup = config
        .dictionary
        .build_lookup()
        .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    tracing::info!(
        sources = ?lookup.source_names(),
        budget_secs = config.dictionary.source_budget.as_secs(),
        words_api_key = config.dictionary.words_api_key.is_some(),
        "📖 Definition lookup initialized"
    );

    // Initialize application services
    let repo: Arc<dyn VocabRepository> = Arc::new(PgVocabRepository::new(pool));
    let feed: Arc<dyn VocabFeed> = Arc::new(BroadcastVocabFeed::new(repo.clone()));
    let vocab_service = Arc::new(VocabService::new(repo, feed));

    let state = AppState {
        vocab_service,
        lookup: Arc::new(lookup),
    };

    let router = build_router(state, api_key);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Lexicard API ready");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters::memory::InMemoryVocabRepository;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use futures::{SinkExt, StreamExt};
    use lexicard::{DefinitionCandidate, DefinitionSource, SourceOutcome};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::net::TcpStream;
    use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};
    use tower::ServiceExt;

    struct CannedSource;

    #[async_trait]
    impl DefinitionSource for CannedSource {
        fn name(&self) -> &str {
            "canned"
        }

        async fn fetch_definitions(&self, word: &str) -> SourceOutcome {
            if word == "serendipity" {
                SourceOutcome::from_candidates(
                    DefinitionCandidate::new(
                        Some("noun"),
                        "the occurrence of events by chance in a happy way",
                        None,
                    )
                    .into_iter()
                    .collect(),
                )
            } else {
                SourceOutcome::Empty
            }
        }
    }

    fn app(api_key: Option<&str>) -> Router {
        let repo: Arc<dyn VocabRepository> = Arc::new(InMemoryVocabRepository::default());
        let feed: Arc<dyn VocabFeed> = Arc::new(BroadcastVocabFeed::new(repo.clone()));
        let sources: Vec<Arc<dyn DefinitionSource>> = vec![Arc::new(CannedSource)];
        let state = AppState {
            vocab_service: Arc::new(VocabService::new(repo, feed)),
            lookup: Arc::new(DefinitionLookup::new(sources)),
        };
        build_router(state, ApiKey::new(api_key.map(str::to_string)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_vocab(body: Value) -> Request<Body> {
        Request::post("/lexicard/vocab")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(&app(None), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_and_list_vocab() {
        let app = app(None);

        let (status, created) = send(
            &app,
            post_vocab(json!({
                "word": "Mitochondria",
                "meaning": "powerhouse of the cell",
                "example": "",
                "subject": "Biology"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["subject"], "biology");
        assert_eq!(created["example"], Value::Null);

        let (status, _) = send(
            &app,
            post_vocab(json!({"word": "verb", "meaning": "a doing word", "subject": "english"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, list) = send(&app, get_request("/lexicard/vocab?subject=biology")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["subject"], "biology");
        assert_eq!(list["count"], 1);
        assert_eq!(list["entries"][0]["word"], "Mitochondria");

        let (_, all) = send(&app, get_request("/lexicard/vocab")).await;
        assert_eq!(all["subject"], "all");
        assert_eq!(all["count"], 2);
    }

    #[tokio::test]
    async fn test_create_vocab_validation_error() {
        let (status, _) = send(
            &app(None),
            post_vocab(json!({"word": "  ", "meaning": "nothing", "subject": "english"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_vocab_rejects_bad_subject() {
        let (status, _) = send(&app(None), get_request("/lexicard/vocab?subject=a%20b")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lookup_returns_candidates() {
        let (status, body) = send(&app(None), get_request("/lexicard/lookup/serendipity")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "canned");
        assert_eq!(body["candidates"][0]["partOfSpeech"], "noun");
        assert_eq!(body["attempts"][0]["outcome"], "found");
        assert_eq!(body["attempts"][0]["count"], 1);
    }

    #[tokio::test]
    async fn test_lookup_without_results_is_ok() {
        let (status, body) = send(&app(None), get_request("/lexicard/lookup/qwzx")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], Value::Null);
        assert_eq!(body["candidates"], json!([]));
        assert_eq!(body["attempts"][0]["outcome"], "empty");
    }

    #[tokio::test]
    async fn test_lookup_blank_word_is_bad_request() {
        let (status, _) = send(&app(None), get_request("/lexicard/lookup/%20%20")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_auth_required_when_key_configured() {
        let app = app(Some("secret"));

        let (status, _) = send(&app, get_request("/lexicard/vocab")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let wrong = Request::get("/lexicard/vocab")
            .header(header::AUTHORIZATION, "Bearer nope")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, wrong).await.0, StatusCode::UNAUTHORIZED);

        let authorized = Request::get("/lexicard/vocab")
            .header(header::AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, authorized).await.0, StatusCode::OK);

        // Health stays public
        assert_eq!(send(&app, get_request("/health")).await.0, StatusCode::OK);
    }

    type LiveSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

    async fn serve(app: Router) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    /// Next text frame as JSON, failing if none arrives in time
    async fn next_json(socket: &mut LiveSocket) -> Value {
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
                .await
                .expect("no frame within 5s")
                .expect("socket closed")
                .unwrap();
            if let Message::Text(text) = frame {
                return serde_json::from_str(&text).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_live_view_follows_subject_and_changes() {
        let app = app(None);
        let addr = serve(app.clone()).await;

        let (mut socket, _) = tokio_tungstenite::connect_async(format!(
            "ws://{}/lexicard/vocab/live",
            addr
        ))
        .await
        .unwrap();

        let initial = next_json(&mut socket).await;
        assert_eq!(initial["subject"], "all");
        assert_eq!(initial["count"], 0);

        socket
            .send(Message::Text(json!({"subject": "math"}).to_string()))
            .await
            .unwrap();
        let switched = next_json(&mut socket).await;
        assert_eq!(switched["subject"], "math");
        assert_eq!(switched["count"], 0);

        let (status, _) = send(
            &app,
            post_vocab(json!({
                "word": "integral",
                "meaning": "area under a curve",
                "subject": "math"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let pushed = next_json(&mut socket).await;
        assert_eq!(pushed["subject"], "math");
        assert_eq!(pushed["count"], 1);
        assert_eq!(pushed["entries"][0]["word"], "integral");

        socket.send(Message::Text("math".to_string())).await.unwrap();
        let rejected = next_json(&mut socket).await;
        assert!(rejected["error"].is_string());

        socket.close(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_live_view_rejects_bad_initial_subject() {
        let addr = serve(app(None)).await;

        let result = tokio_tungstenite::connect_async(format!(
            "ws://{}/lexicard/vocab/live?subject=a%20b",
            addr
        ))
        .await;
        assert!(result.is_err());
    }
}
