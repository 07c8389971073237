//! Thin chat transport around `astro-companion-core`.
//!
//! Exposes a health route and a WebSocket chat endpoint; every inbound
//! frame is one dialog event, every reply is one rendered screen. All
//! reference logic lives in the core crate.

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

mod protocol;

use astro_companion_core::agent::AstroAgent;
use astro_companion_core::catalogue::CatalogueStore;
use astro_companion_core::dialog::InboundEvent;
use protocol::{ChatRequest, ChatResponse};

pub struct ApiState {
    agent: AstroAgent,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalogue_path =
        std::env::var("ASTRO_CATALOGUE_PATH").unwrap_or_else(|_| "celestial_data.json".to_string());

    let catalogue = match CatalogueStore::load(&catalogue_path).await {
        Ok(store) => store,
        Err(e) => {
            error!(path = %catalogue_path, error = %e, "failed to load catalogue, continuing with an empty set");
            CatalogueStore::empty(&catalogue_path)
        }
    };
    if catalogue.is_empty() {
        anyhow::bail!("catalogue is empty, nothing to serve");
    }
    info!(objects = catalogue.len(), "catalogue ready");

    let state = Arc::new(ApiState {
        agent: AstroAgent::new(Arc::new(catalogue)),
    });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/ws/chat/:session_id", get(ws_handler))
        .with_state(state);

    let bind_addr =
        std::env::var("ASTRO_CHAT_BACKEND_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Astro Chat Backend listening");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn health_check() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "Astro Chat Backend Operational")
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(session_id): Path<String>,
    State(state): State<Arc<ApiState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, session_id, state))
}

async fn handle_socket(mut socket: WebSocket, session_id: String, state: Arc<ApiState>) {
    info!(session = %session_id, "WebSocket connected");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                let req: ChatRequest = match serde_json::from_str(&text) {
                    Ok(req) => req,
                    Err(e) => {
                        error!(session = %session_id, error = %e, "Invalid ChatRequest JSON");
                        send_response(
                            &mut socket,
                            &ChatResponse::StatusUpdate {
                                status: "invalid_request".to_string(),
                                details: Some(e.to_string()),
                            },
                        )
                        .await;
                        continue;
                    }
                };

                if req.session_id.to_string() != session_id {
                    error!(
                        path_session = %session_id,
                        body_session = %req.session_id,
                        "session_id mismatch between path and payload"
                    );
                    send_response(
                        &mut socket,
                        &ChatResponse::StatusUpdate {
                            status: "session_id_mismatch".to_string(),
                            details: Some(
                                "session_id in payload must match /ws/chat/:session_id".to_string(),
                            ),
                        },
                    )
                    .await;
                    continue;
                }

                let started = std::time::Instant::now();
                let render = state
                    .agent
                    .process_event(
                        &session_id,
                        InboundEvent {
                            kind: req.kind,
                            payload: req.payload,
                        },
                    )
                    .await;

                send_response(
                    &mut socket,
                    &ChatResponse::Render {
                        id: Uuid::new_v4(),
                        text: render.text,
                        markup: render.markup,
                        latency_ms: started.elapsed().as_millis() as u64,
                    },
                )
                .await;
            }
            Message::Close(_) => {
                info!(session = %session_id, "WebSocket closed by client");
                break;
            }
            _ => {}
        }
    }
}

async fn send_response(socket: &mut WebSocket, response: &ChatResponse) {
    let json = serde_json::to_string(response).unwrap_or_else(|_| {
        "{\"type\":\"status_update\",\"status\":\"serialization_error\"}".to_string()
    });
    let _ = socket.send(Message::Text(json)).await;
}
