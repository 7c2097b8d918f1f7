//! Where the webhook URL lives when it is not in the config file.
//!
//! The CLI stores it in the OS keyring. Hosts without a keyring can plug in
//! their own [`CredentialStore`].

use std::sync::Mutex;

use crate::error::ShareError;

/// Keyring service name.
pub const SERVICE: &str = "burnoutcheck";

/// Entry holding the webhook URL.
pub const WEBHOOK_URL_KEY: &str = "webhook_url";

/// Secret storage keyed by name. Missing entries are `Ok(None)`, never errors.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ShareError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ShareError>;
    /// Removing an absent entry succeeds.
    fn delete(&self, key: &str) -> Result<(), ShareError>;
}

/// OS keyring (macOS Keychain, Windows Credential Manager, Secret Service).
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(SERVICE)
    }
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, ShareError> {
        Ok(keyring::Entry::new(&self.service, key)?)
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShareError> {
        match self.entry(key)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ShareError> {
        self.entry(key)?.set_password(value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ShareError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local store for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, std::collections::HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ShareError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ShareError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ShareError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// Validate and store the webhook URL. Only `https` URLs are accepted.
pub fn store_webhook_url(store: &dyn CredentialStore, url: &str) -> Result<(), ShareError> {
    let parsed = url::Url::parse(url)?;
    if parsed.scheme() != "https" {
        return Err(ShareError::InsecureWebhookUrl(url.to_string()));
    }
    store.set(WEBHOOK_URL_KEY, parsed.as_str())?;
    tracing::info!("webhook URL stored");
    Ok(())
}

pub fn clear_webhook_url(store: &dyn CredentialStore) -> Result<(), ShareError> {
    store.delete(WEBHOOK_URL_KEY)
}

/// Webhook URL from the config value, else from `store`.
///
/// A store failure is treated like a missing URL so the share can still
/// fall back to another path.
pub fn resolve_webhook_url(configured: &str, store: &dyn CredentialStore) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    store
        .get(WEBHOOK_URL_KEY)
        .unwrap_or_else(|e| {
            tracing::warn!("could not read stored webhook URL: {e}");
            None
        })
        .unwrap_or_default()
}
