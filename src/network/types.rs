use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Response from the external content provider.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
    pub path: String,
}

impl FetchResponse {
    pub fn ok(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into(), path: path.into() }
    }

    pub fn with_status(path: impl Into<String>, status: u16) -> Self {
        Self { status, body: String::new(), path: path.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Callback used to fetch deferred file content.
/// Parameter: the deferred path. `Err` is a transport failure.
pub type FetchFn = Arc<dyn Fn(String)
    -> Pin<Box<dyn Future<Output = Result<FetchResponse, String>> + Send>> + Send + Sync>;

/// Failure to read deferred content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Provider answered with a non-success status
    #[error("Error fetching file: {status}")]
    Status { status: u16 },
    /// Provider could not be reached
    #[error("Error fetching file: {message}")]
    Transport { message: String },
    /// No provider configured for this session
    #[error("Error fetching file: no content provider configured")]
    Unavailable,
}
