//! Session-facing façade over the dialog engine.
//!
//! Owns the catalogue handle and the per-session current-screen map. The
//! transport hands every inbound event here and sends the returned render
//! back to the user; the current screen is the only state a session keeps
//! between events.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::catalogue::CatalogueStore;
use crate::dialog::{DialogEngine, InboundEvent, RenderOut, Screen};

pub struct AstroAgent {
    engine: DialogEngine,
    sessions: RwLock<HashMap<String, Screen>>,
}

impl AstroAgent {
    pub fn new(catalogue: Arc<CatalogueStore>) -> Self {
        info!(objects = catalogue.len(), "AstroAgent created");
        Self {
            engine: DialogEngine::new(catalogue),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Processes one inbound event for a session and returns the render.
    /// A session that has never been seen starts at the main menu.
    pub async fn process_event(&self, session_id: &str, event: InboundEvent) -> RenderOut {
        let current = {
            let sessions = self.sessions.read().await;
            sessions.get(session_id).cloned().unwrap_or(Screen::MainMenu)
        };

        let (next, render) = self.engine.handle(&current, &event);

        info!(
            session = %session_id,
            kind = ?event.kind,
            payload = %event.payload,
            markup = ?render.markup,
            "dialog event processed"
        );

        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), next);
        render
    }

    /// The screen a session is currently on (main menu if never seen).
    pub async fn current_screen(&self, session_id: &str) -> Screen {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or(Screen::MainMenu)
    }
}
