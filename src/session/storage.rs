//! Persistent bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only value this client persists across page loads. In the
//! browser it lives in `localStorage` under one fixed key; on non-hydrate
//! targets a thread-local cell stands in so native tests and server renders
//! behave like an empty browser profile.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "rtc_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the persisted token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_TOKEN.with(|cell| cell.borrow().clone())
    }
}

/// Persist `token`, replacing any previous value.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
    }
}

/// Delete the persisted token. Safe to call when none is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_TOKEN.with(|cell| *cell.borrow_mut() = None);
    }
}
