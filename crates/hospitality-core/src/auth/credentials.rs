use anyhow::{Context, Result};
use keyring::Entry;

use crate::config::APP_NAME;

/// Keychain account under which the AI service key is stored.
const AI_KEY_ACCOUNT: &str = "ai-api-key";

pub struct CredentialStore;

impl CredentialStore {
    /// Store the AI service key in the OS keychain
    pub fn store_ai_key(key: &str) -> Result<()> {
        let entry = Entry::new(APP_NAME, AI_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .set_password(key)
            .context("Failed to store AI key in keychain")?;
        Ok(())
    }

    /// Retrieve the AI service key from the OS keychain
    pub fn ai_key() -> Result<String> {
        let entry = Entry::new(APP_NAME, AI_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve AI key from keychain")
    }

    /// Delete the stored AI service key
    pub fn delete_ai_key() -> Result<()> {
        let entry = Entry::new(APP_NAME, AI_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete AI key from keychain")?;
        Ok(())
    }
}
