//! Generative-AI collaborator.
//!
//! This module provides the `AiClient` used to synthesize meeting agendas,
//! social-media insight summaries and shift suggestions. The service is
//! treated as opaque: a prompt and a JSON schema go out, schema-shaped JSON
//! comes back, and any failure surfaces to callers as "nothing produced".

pub mod client;
pub mod content;
pub mod error;

pub use client::AiClient;
pub use content::{AgendaItem, MeetingAgenda, Sentiment, ShiftSuggestion, SocialInsights};
pub use error::AiError;
