// src/network/fetch.rs

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use super::allow_list::content_path;
use super::types::{FetchError, FetchFn, FetchResponse};

/// Fetch deferred content and return its text. Non-success statuses and
/// transport failures both come back as `FetchError`.
pub async fn fetch_text(fetch_fn: &FetchFn, path: &str) -> Result<String, FetchError> {
    log::debug!("fetching deferred content {}", path);
    let response = fetch_fn(path.to_string()).await.map_err(|message| {
        log::warn!("fetch of {} failed: {}", path, message);
        FetchError::Transport { message }
    })?;

    if !response.is_success() {
        log::warn!("fetch of {} returned status {}", path, response.status);
        return Err(FetchError::Status { status: response.status });
    }
    Ok(response.body)
}

/// Create a FetchFn that serves deferred paths from files under `root`.
/// Missing files answer 404; paths escaping `root` answer 403.
pub fn create_dir_fetch_fn(root: impl Into<PathBuf>) -> FetchFn {
    let root = root.into();
    Arc::new(move |path: String| {
        let root = root.clone();
        Box::pin(async move {
            let Some(full) = content_path(&root, &path) else {
                return Ok(FetchResponse::with_status(path, 403));
            };
            match tokio::fs::read_to_string(&full).await {
                Ok(body) => Ok(FetchResponse::ok(path, body)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Ok(FetchResponse::with_status(path, 404))
                }
                Err(e) => Err(format!("{}: {}", full.display(), e)),
            }
        }) as Pin<Box<dyn Future<Output = Result<FetchResponse, String>> + Send>>
    })
}
