//! The I/O seam between the client core and whatever speaks HTTP.

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one `HttpRequest` and returns the raw response.
///
/// Implementations must hand back non-2xx responses as data; only failures
/// that produce no response at all belong in `FetchError::Transport`.
/// `execute` is blocking and is called from a worker thread.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}
