//! Menu-driven navigation state machine.
//!
//! Every inbound event maps deterministically to a next screen and a render.
//! Unrecognized input falls back to the main menu with a prompt; unknown
//! body/pair/task identifiers render "not found" in place without changing
//! the logical screen.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calc::{self, CompareField, ComparisonPair, TaskKind};
use crate::catalogue::CatalogueStore;
use crate::content;
use crate::format;
use crate::parse::parse_scientific;

/// The eight planet names offered by the planet picker, in menu order.
pub const PLANETS: [&str; 8] = [
    "Меркурий", "Венера", "Земля", "Марс", "Юпитер", "Сатурн", "Уран", "Нептун",
];

/// Where a body-detail screen was opened from; decides where `back` leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    MainMenu,
    PlanetPicker,
}

/// Logical screens of the conversation. The only per-session state is which
/// of these the session is currently on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    PlanetPicker,
    ComparePicker,
    TaskPicker,
    BodyDetail { name: String, origin: DetailOrigin },
    ComparisonResult { first: String, second: String },
    TaskResult { task: TaskKind },
}

/// How the transport classified the inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Text,
    MenuToken,
}

/// One inbound "user pressed this / typed this" event.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub kind: EventKind,
    pub payload: String,
}

/// Which keyboard the collaborator should attach to the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Markup {
    None,
    MainMenu,
    PlanetPicker,
    ComparePicker,
    TaskPicker,
    BackButton,
}

/// One outbound render call for the collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOut {
    pub text: String,
    pub markup: Markup,
}

impl RenderOut {
    fn new(text: impl Into<String>, markup: Markup) -> Self {
        Self {
            text: text.into(),
            markup,
        }
    }
}

enum Command {
    Start,
    Planets,
    Compare,
    Tasks,
    Methods,
    Help,
    ShowBody(String),
    ShowPair(String, String),
    ShowTask(String),
    Back,
    Density { mass: String, radius: String },
    DensityMalformed,
    Unknown,
}

static DENSITY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:плотность|density)\s*:").expect("density command prefix regex")
});

static DENSITY_ARGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:масса|mass)\s*=\s*(\S+)\s+(?:радиус|radius)\s*=\s*(\S+)")
        .expect("density command args regex")
});

fn parse_token(payload: &str) -> Command {
    let token = payload.trim();
    if token == "back" {
        return Command::Back;
    }
    if let Some(name) = token.strip_prefix("body:") {
        return Command::ShowBody(name.trim().to_string());
    }
    if let Some(rest) = token.strip_prefix("compare:") {
        let mut parts = rest.splitn(2, ':');
        if let (Some(first), Some(second)) = (parts.next(), parts.next()) {
            let (first, second) = (first.trim(), second.trim());
            if !first.is_empty() && !second.is_empty() {
                return Command::ShowPair(first.to_string(), second.to_string());
            }
        }
        return Command::Unknown;
    }
    if let Some(id) = token.strip_prefix("task:") {
        return Command::ShowTask(id.trim().to_string());
    }
    match token {
        "start" => Command::Start,
        "planets" => Command::Planets,
        "compare" => Command::Compare,
        "tasks" => Command::Tasks,
        "methods" => Command::Methods,
        "help" => Command::Help,
        _ => Command::Unknown,
    }
}

fn parse_text(payload: &str) -> Command {
    let text = payload.trim();

    if DENSITY_PREFIX.is_match(text) {
        if let Some(caps) = DENSITY_ARGS.captures(text) {
            return Command::Density {
                mass: caps[1].to_string(),
                radius: caps[2].to_string(),
            };
        }
        return Command::DensityMalformed;
    }

    // The literal reply-keyboard button labels.
    match text {
        "/start" | "start" => return Command::Start,
        "🪐 8 Планет" => return Command::Planets,
        "⭐️ Сириус" => return Command::ShowBody("Сириус".to_string()),
        "☀️ Солнце" => return Command::ShowBody("Солнце".to_string()),
        "📊 Сравнить" => return Command::Compare,
        "📝 Задачи" => return Command::Tasks,
        "🔬 Методы" => return Command::Methods,
        "❓ Помощь" => return Command::Help,
        _ => {}
    }

    // Plain-word synonyms for transports without a reply keyboard.
    match text.to_lowercase().as_str() {
        "planets" => Command::Planets,
        "compare" => Command::Compare,
        "tasks" => Command::Tasks,
        "methods" => Command::Methods,
        "help" => Command::Help,
        _ => Command::Unknown,
    }
}

/// The navigation state machine. Holds only the read-only catalogue handle;
/// the per-session current screen is threaded through [`Self::handle`].
pub struct DialogEngine {
    catalogue: Arc<CatalogueStore>,
}

impl DialogEngine {
    pub fn new(catalogue: Arc<CatalogueStore>) -> Self {
        Self { catalogue }
    }

    /// Handles one event against the session's current screen. Total: every
    /// (screen, event) pair yields a next screen and a render.
    pub fn handle(&self, screen: &Screen, event: &InboundEvent) -> (Screen, RenderOut) {
        let command = match event.kind {
            EventKind::MenuToken => parse_token(&event.payload),
            EventKind::Text => parse_text(&event.payload),
        };
        debug!(payload = %event.payload, kind = ?event.kind, "dialog event classified");
        self.transition(screen, command)
    }

    fn transition(&self, screen: &Screen, command: Command) -> (Screen, RenderOut) {
        match command {
            Command::Start => (
                Screen::MainMenu,
                RenderOut::new(content::WELCOME, Markup::MainMenu),
            ),
            Command::Planets => (
                Screen::PlanetPicker,
                RenderOut::new(content::PLANET_PROMPT, Markup::PlanetPicker),
            ),
            Command::Compare => (
                Screen::ComparePicker,
                RenderOut::new(content::COMPARE_PROMPT, Markup::ComparePicker),
            ),
            Command::Tasks => (
                Screen::TaskPicker,
                RenderOut::new(content::TASK_PROMPT, Markup::TaskPicker),
            ),
            Command::Methods => (
                Screen::MainMenu,
                RenderOut::new(content::METHODS, Markup::MainMenu),
            ),
            Command::Help => (
                Screen::MainMenu,
                RenderOut::new(content::HELP, Markup::MainMenu),
            ),
            Command::ShowBody(name) => self.show_body(screen, &name),
            Command::ShowPair(first, second) => self.show_pair(screen, &first, &second),
            Command::ShowTask(id) => self.show_task(screen, &id),
            Command::Back => back_from(screen),
            Command::Density { mass, radius } => (screen.clone(), density_command(&mass, &radius)),
            Command::DensityMalformed => (
                screen.clone(),
                RenderOut::new(content::DENSITY_USAGE, Markup::None),
            ),
            Command::Unknown => (
                Screen::MainMenu,
                RenderOut::new(content::USE_MENU, Markup::MainMenu),
            ),
        }
    }

    fn show_body(&self, screen: &Screen, name: &str) -> (Screen, RenderOut) {
        match self.catalogue.lookup(name) {
            Some((canonical, record)) => {
                let origin = if matches!(screen, Screen::PlanetPicker) {
                    DetailOrigin::PlanetPicker
                } else {
                    DetailOrigin::MainMenu
                };
                let next = Screen::BodyDetail {
                    name: canonical.to_string(),
                    origin,
                };
                (
                    next,
                    RenderOut::new(format::body_info(canonical, record), Markup::BackButton),
                )
            }
            None => (
                screen.clone(),
                RenderOut::new(content::body_not_found(name), Markup::None),
            ),
        }
    }

    fn show_pair(&self, screen: &Screen, first: &str, second: &str) -> (Screen, RenderOut) {
        let Some(pair) = ComparisonPair::from_names(first, second) else {
            return (
                screen.clone(),
                RenderOut::new(content::PAIR_NOT_FOUND, Markup::None),
            );
        };

        let (name_a, name_b) = pair.names();
        let (Some((key_a, record_a)), Some((key_b, record_b))) =
            (self.catalogue.lookup(name_a), self.catalogue.lookup(name_b))
        else {
            return (
                screen.clone(),
                RenderOut::new(content::PAIR_BODY_MISSING, Markup::None),
            );
        };

        // Densities are live-computed where the pair calls for them; an
        // unparseable record just drops the block, the narrative stays.
        let densities = if pair.computes_density() {
            calc::compare_field((key_a, record_a), (key_b, record_b), CompareField::Density).ok()
        } else {
            None
        };

        let text = format::comparison(pair, (key_a, record_a), (key_b, record_b), densities.as_ref());
        (
            Screen::ComparisonResult {
                first: key_a.to_string(),
                second: key_b.to_string(),
            },
            RenderOut::new(text, Markup::BackButton),
        )
    }

    fn show_task(&self, screen: &Screen, id: &str) -> (Screen, RenderOut) {
        match TaskKind::from_id(id) {
            Some(task) => (
                Screen::TaskResult { task },
                RenderOut::new(format::task_solution(task), Markup::BackButton),
            ),
            None => (
                screen.clone(),
                RenderOut::new(content::TASK_NOT_FOUND, Markup::None),
            ),
        }
    }
}

/// `back` returns to the picker that could have produced the current screen;
/// from a picker (or anywhere else) it returns to the main menu.
fn back_from(screen: &Screen) -> (Screen, RenderOut) {
    match screen {
        Screen::BodyDetail {
            origin: DetailOrigin::PlanetPicker,
            ..
        } => (
            Screen::PlanetPicker,
            RenderOut::new(content::PLANET_PROMPT, Markup::PlanetPicker),
        ),
        Screen::ComparisonResult { .. } => (
            Screen::ComparePicker,
            RenderOut::new(content::COMPARE_PROMPT, Markup::ComparePicker),
        ),
        Screen::TaskResult { .. } => (
            Screen::TaskPicker,
            RenderOut::new(content::TASK_PROMPT, Markup::TaskPicker),
        ),
        _ => (
            Screen::MainMenu,
            RenderOut::new(content::BACK_TO_MAIN, Markup::MainMenu),
        ),
    }
}

fn density_command(mass_raw: &str, radius_raw: &str) -> RenderOut {
    let (mass, radius) = match (parse_scientific(mass_raw), parse_scientific(radius_raw)) {
        (Ok(mass), Ok(radius)) => (mass, radius),
        _ => return RenderOut::new(content::DENSITY_NUMBER_ERROR, Markup::None),
    };
    match calc::density(mass.value, radius.value) {
        Ok(result) => RenderOut::new(format::density_result(&result), Markup::None),
        Err(e) => RenderOut::new(format!("❌ Ошибка расчета: {}", e), Markup::None),
    }
}
