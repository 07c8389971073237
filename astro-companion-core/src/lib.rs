//! astro-companion-core
//!
//! Core logic of the astronomy reference companion: the celestial-body
//! catalogue, the scientific-value parser, the derived-quantity calculator,
//! the menu navigation state machine and the text renderers.
//!
//! The chat transport lives in `astro-chat-backend` and talks to this crate
//! through [`agent::AstroAgent`]: one inbound event in, one render out.

pub mod agent;
pub mod calc;
pub mod catalogue;
pub mod content;
pub mod dialog;
pub mod format;
pub mod parse;

pub use agent::AstroAgent;
pub use catalogue::{CatalogueStore, CelestialRecord, StoreError};
pub use dialog::{EventKind, InboundEvent, Markup, RenderOut, Screen};
