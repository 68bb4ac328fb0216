#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;
#[cfg(not(test))]
use tracing::warn;

use crate::modules::auth::types::SessionCredentials;

const KIND_ACCESS: &str = "access";
const KIND_REFRESH: &str = "refresh";

fn keyring_key(kind: &str, context_name: &str) -> String {
    format!("{kind}::{context_name}")
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(not(test))]
fn keyring_entry(kind: &str, context_name: &str) -> anyhow::Result<keyring::Entry> {
    let service = "backoffice-cli";
    let key = keyring_key(kind, context_name);
    keyring::Entry::new(service, &key)
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(kind: &str, context_name: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind, context_name)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {kind} token: {err}"))
}

#[cfg(not(test))]
fn keyring_get(kind: &str, context_name: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(kind, context_name)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {kind} token from keychain for context '{}': {err}",
            context_name
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(kind: &str, context_name: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind, context_name)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!(context = %context_name, "failed to delete {kind} token: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
fn keyring_set(kind: &str, context_name: &str, value: &str) -> anyhow::Result<()> {
    let key = keyring_key(kind, context_name);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(key, value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(kind: &str, context_name: &str) -> anyhow::Result<Option<String>> {
    let key = keyring_key(kind, context_name);
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&key).cloned())
}

#[cfg(test)]
fn keyring_delete(kind: &str, context_name: &str) -> anyhow::Result<()> {
    let key = keyring_key(kind, context_name);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&key);
    Ok(())
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}

fn put_or_delete(kind: &str, context_name: &str, value: Option<&str>) -> anyhow::Result<()> {
    match value {
        Some(value) => {
            keyring_set(kind, context_name, value)?;
            debug!(context = %context_name, "stored {kind} token in keyring");
        }
        None => {
            keyring_delete(kind, context_name)?;
            debug!(context = %context_name, "removed {kind} token from keyring");
        }
    }
    Ok(())
}

pub(crate) fn load_session(context_name: &str) -> anyhow::Result<SessionCredentials> {
    let access_token = keyring_get(KIND_ACCESS, context_name)?;
    let refresh_token = keyring_get(KIND_REFRESH, context_name)?;
    Ok(SessionCredentials::new(access_token, refresh_token))
}

pub(crate) fn store_session(
    context_name: &str,
    credentials: &SessionCredentials,
) -> anyhow::Result<()> {
    put_or_delete(
        KIND_ACCESS,
        context_name,
        credentials.access_token.as_deref(),
    )?;
    put_or_delete(
        KIND_REFRESH,
        context_name,
        credentials.refresh_token.as_deref(),
    )
}

pub(crate) fn delete_session(context_name: &str) -> anyhow::Result<()> {
    keyring_delete(KIND_ACCESS, context_name)?;
    keyring_delete(KIND_REFRESH, context_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_roundtrip() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        let credentials = SessionCredentials::new(Some("A".to_string()), Some("B".to_string()));
        store_session("ctx", &credentials)?;
        assert_eq!(load_session("ctx")?, credentials);
        delete_session("ctx")?;
        assert!(load_session("ctx")?.is_empty());
        Ok(())
    }

    #[test]
    fn storing_cleared_fields_deletes_entries() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        store_session(
            "ctx",
            &SessionCredentials::new(Some("A".to_string()), Some("B".to_string())),
        )?;
        store_session("ctx", &SessionCredentials::new(Some("A2".to_string()), None))?;
        let loaded = load_session("ctx")?;
        assert_eq!(loaded.access_token.as_deref(), Some("A2"));
        assert!(loaded.refresh_token.is_none());
        Ok(())
    }

    #[test]
    fn contexts_are_isolated() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        store_session("one", &SessionCredentials::with_access_token("A"))?;
        assert!(load_session("two")?.is_empty());
        Ok(())
    }
}
