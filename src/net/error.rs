//! Error taxonomy for backend calls.
//!
//! Every failure a view can see resolves to one of these variants; nothing
//! here is fatal to the process. Connection-class errors are kept
//! distinguishable from credential/server errors because the user acts on
//! them differently (retry vs re-enter password).

use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the bearer token. The HTTP layer has already
    /// cleared the stored session and forced navigation to the login view.
    Unauthorized,
    /// Non-success HTTP status, carrying the backend's message when one
    /// could be extracted from the body.
    Server { status: u16, message: String },
    /// Transport-level failure: offline, DNS, CORS.
    Network(String),
    /// The request exceeded the client-side deadline.
    Timeout,
    /// The response parsed as JSON but matched none of the known shapes.
    UnrecognizedResponse,
}

impl ApiError {
    /// Connection-class errors are actionable by retrying, not by changing
    /// input; views render them differently from credential errors.
    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => {
                write!(f, "Sesi telah berakhir, silakan login kembali")
            }
            ApiError::Server { status, message } => {
                if message.is_empty() {
                    write!(f, "Terjadi kesalahan pada server (HTTP {status})")
                } else {
                    write!(f, "{message}")
                }
            }
            ApiError::Network(_) | ApiError::Timeout => {
                write!(f, "Tidak dapat terhubung ke server, periksa koneksi Anda")
            }
            ApiError::UnrecognizedResponse => {
                write!(f, "Respons server tidak dikenali")
            }
        }
    }
}

impl std::error::Error for ApiError {}
