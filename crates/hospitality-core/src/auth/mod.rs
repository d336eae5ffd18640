//! Credential handling.
//!
//! The only secret is the generative-AI service key. It is read from the
//! `HOSPITALITY_AI_KEY` environment variable when set, otherwise from the OS
//! keychain via `CredentialStore`.

pub mod credentials;

pub use credentials::CredentialStore;

use tracing::debug;

/// Environment variable that overrides the stored AI key.
pub const AI_KEY_ENV: &str = "HOSPITALITY_AI_KEY";

/// The AI key from the environment or keychain, if either has one.
pub fn resolve_ai_key() -> Option<String> {
    if let Ok(key) = std::env::var(AI_KEY_ENV) {
        if !key.trim().is_empty() {
            return Some(key.trim().to_string());
        }
    }
    match CredentialStore::ai_key() {
        Ok(key) => Some(key),
        Err(e) => {
            debug!(error = %e, "No AI key in keychain");
            None
        }
    }
}
