//! Application configuration: API origin selection and fixed constants.
//!
//! The API base is chosen once at startup, not per request: dev builds go
//! through the trunk proxy at `/api`, release builds hit the configured
//! production origin (overridable at compile time via `KOPERASI_API_ORIGIN`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default production API origin, used when no override is provided.
pub const DEFAULT_API_ORIGIN: &str = "https://polres-be-fix.vercel.app";

/// Display name shown in the navigation bar and page titles.
pub const APP_NAME: &str = "Koperasi Primkoppolresta";

/// localStorage key for the bearer token.
pub const TOKEN_KEY: &str = "koperasi_token";

/// localStorage key for the serialized principal.
pub const PRINCIPAL_KEY: &str = "koperasi_user";

/// localStorage key for a one-shot notice shown on the login page
/// (set when a 401 forces a logout mid-session).
pub const FLASH_KEY: &str = "koperasi_flash";

/// Page size used by paginated list requests.
pub const PAGE_SIZE: u32 = 10;

/// Per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Resolve the API base path for this build.
///
/// Debug builds use the dev proxy so the browser never sees a cross-origin
/// request; release builds talk to the backend origin directly.
pub fn api_base() -> String {
    if cfg!(debug_assertions) {
        "/api".to_owned()
    } else {
        option_env!("KOPERASI_API_ORIGIN")
            .unwrap_or(DEFAULT_API_ORIGIN)
            .to_owned()
    }
}
