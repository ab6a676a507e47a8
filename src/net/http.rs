//! HTTP transport to the backend.
//!
//! DESIGN
//! ======
//! Every call goes through `request_json`, which attaches the stored
//! bearer token, enforces a client-side deadline, and folds transport and
//! status failures into `ApiError`. A 401 on a token-bearing request is
//! handled here once for the whole app: the stored session is wiped, a
//! flash message is queued for the login view, and the browser is sent to
//! `/login`. A 401 on a request that carried no token (a failed login)
//! surfaces as a server error with the backend message intact.
//!
//! Reads go through `get_json`, which retries once after a short pause on
//! transport errors. Writes never retry; the backend is not idempotent.
//!
//! Outside the browser the transport functions fail with a network error
//! so everything layered on top stays host-testable.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

use crate::config;
use crate::net::error::{ApiError, ApiResult};
use crate::util::storage;

/// Delay before the single read retry.
#[cfg(target_arch = "wasm32")]
const RETRY_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// File handle for multipart uploads. Only the browser can produce one;
/// the host alias exists so signatures stay identical across targets.
#[cfg(target_arch = "wasm32")]
pub type UploadFile = web_sys::File;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct UploadFile;

/// Absolute request URL for an API path.
pub fn url_for(path: &str) -> String {
    format!("{}{path}", config::api_base())
}

/// Backend error bodies carry the message under `message` or, in older
/// deployments, under `error`. Empty string when neither is present.
pub fn server_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or_default()
        .to_owned()
}

/// `Authorization` header value from the stored token, if any.
pub fn bearer() -> Option<String> {
    storage::get(config::TOKEN_KEY).map(|token| format!("Bearer {token}"))
}

/// Whether a response ends the stored session. Only a 401 on a request
/// that actually carried a bearer token means the token went stale; a 401
/// without one is a credentials failure the caller must render itself.
pub fn ends_session(status: u16, authed: bool) -> bool {
    status == 401 && authed
}

/// GET with a single retry on transport failure.
pub async fn get_json(path: &str) -> ApiResult<Value> {
    match request_json(Method::Get, path, None).await {
        Err(ApiError::Network(_)) => {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(RETRY_DELAY_MS).await;
            request_json(Method::Get, path, None).await
        }
        other => other,
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use futures::future::{Either, select};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde_json::Value;

    use super::{Method, UploadFile, ends_session, server_message};
    use crate::config;
    use crate::net::error::{ApiError, ApiResult};
    use crate::util::storage;

    /// Send a JSON request and decode the JSON body.
    pub async fn request_json(
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let token = super::bearer();
        let authed = token.is_some();
        let builder = with_auth(builder_for(method, path), token);
        let request = match body {
            Some(json) => builder.json(json).map_err(as_network)?,
            None => builder.build().map_err(as_network)?,
        };
        let response = with_deadline(request.send()).await?;
        finish(response, authed).await
    }

    /// Send a multipart form, used by the product photo endpoints. Plain
    /// fields first, then the photo under `foto` when one was picked.
    pub async fn request_multipart(
        method: Method,
        path: &str,
        fields: Vec<(&'static str, String)>,
        photo: Option<UploadFile>,
    ) -> ApiResult<Value> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
        for (name, value) in fields {
            let _ = form.append_with_str(name, &value);
        }
        if let Some(file) = photo {
            let _ = form.append_with_blob_and_filename("foto", &file, &file.name());
        }

        let token = super::bearer();
        let authed = token.is_some();
        let request = with_auth(builder_for(method, path), token)
            .body(form)
            .map_err(as_network)?;
        let response = with_deadline(request.send()).await?;
        finish(response, authed).await
    }

    fn builder_for(method: Method, path: &str) -> RequestBuilder {
        let url = super::url_for(path);
        match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    fn with_auth(builder: RequestBuilder, token: Option<String>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &token),
            None => builder,
        }
    }

    async fn with_deadline(
        send: impl Future<Output = Result<Response, gloo_net::Error>>,
    ) -> ApiResult<Response> {
        let deadline = gloo_timers::future::TimeoutFuture::new(config::REQUEST_TIMEOUT_MS);
        match select(Box::pin(send), Box::pin(deadline)).await {
            Either::Left((result, _)) => result.map_err(as_network),
            Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }

    async fn finish(response: Response, authed: bool) -> ApiResult<Value> {
        let status = response.status();
        if ends_session(status, authed) {
            expire_session();
            return Err(ApiError::Unauthorized);
        }

        let text = response.text().await.map_err(as_network)?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !(200..300).contains(&status) {
            return Err(ApiError::Server {
                status,
                message: server_message(&body),
            });
        }
        if body.is_null() && !text.trim().is_empty() {
            return Err(ApiError::UnrecognizedResponse);
        }
        Ok(body)
    }

    /// Wipe the stored session and push the browser to the login view.
    /// The flash message survives the reload via storage.
    fn expire_session() {
        storage::remove(config::TOKEN_KEY);
        storage::remove(config::PRINCIPAL_KEY);
        storage::set(config::FLASH_KEY, "Sesi telah berakhir, silakan login kembali");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }

    fn as_network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{request_json, request_multipart};

#[cfg(not(target_arch = "wasm32"))]
pub async fn request_json(
    _method: Method,
    _path: &str,
    _body: Option<&Value>,
) -> ApiResult<Value> {
    Err(ApiError::Network(
        "not available outside the browser".to_owned(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn request_multipart(
    _method: Method,
    _path: &str,
    _fields: Vec<(&'static str, String)>,
    _photo: Option<UploadFile>,
) -> ApiResult<Value> {
    Err(ApiError::Network(
        "not available outside the browser".to_owned(),
    ))
}
