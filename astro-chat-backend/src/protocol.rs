use astro_companion_core::dialog::{EventKind, Markup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- 1. Request from the chat frontend (one user event) ---
#[derive(Debug, Deserialize, Clone)]
pub struct ChatRequest {
    pub session_id: Uuid,
    pub kind: EventKind,
    pub payload: String,
    pub timestamp: DateTime<Utc>,
}

// --- 2. Response to the chat frontend ---
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type")]
pub enum ChatResponse {
    /// The rendered screen text plus the keyboard the frontend should show.
    #[serde(rename = "render")]
    Render {
        id: Uuid,
        text: String,
        markup: Markup,
        latency_ms: u64,
    },

    /// Transport-level problems (bad JSON, session mismatch).
    #[serde(rename = "status_update")]
    StatusUpdate {
        status: String,
        details: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_deserialize_from_frontend_json() {
        let raw = r#"{
            "session_id": "7b1f3f44-9c1f-4b8e-9d9f-0a8f3a1d2c3b",
            "kind": "menu_token",
            "payload": "body:Земля",
            "timestamp": "2025-01-15T12:00:00Z"
        }"#;
        let req: ChatRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.kind, EventKind::MenuToken);
        assert_eq!(req.payload, "body:Земля");
    }

    #[test]
    fn renders_serialize_with_snake_case_markup() {
        let resp = ChatResponse::Render {
            id: Uuid::nil(),
            text: "Главное меню".to_string(),
            markup: Markup::MainMenu,
            latency_ms: 1,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""type":"render""#));
        assert!(json.contains(r#""markup":"main_menu""#));
    }
}
