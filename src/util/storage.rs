//! localStorage wrapper.
//!
//! All durable client-side state (the session token, the serialized
//! principal, and the one-shot login flash) goes through these helpers.
//! Outside the browser a thread-local map stands in for localStorage, so
//! session logic that reads and writes keys stays testable on the host.
//! Tests run one per thread, which keeps their stores isolated.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a string value, or `None` if missing or storage is unavailable.
pub fn get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.local_storage().ok()??.get_item(key).ok()?
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| store.borrow().get(key).cloned())
    }
}

/// Store a string value. Failures (quota, disabled storage) are ignored.
pub fn set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| store.borrow_mut().insert(key.to_owned(), value.to_owned()));
    }
}

/// Remove a key if present.
pub fn remove(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| store.borrow_mut().remove(key));
    }
}

/// Read a key and remove it in the same call (one-shot flash messages).
pub fn take(key: &str) -> Option<String> {
    let value = get(key)?;
    remove(key);
    Some(value)
}
