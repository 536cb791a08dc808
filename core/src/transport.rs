//! The I/O seam between the core and its host.

use std::future::Future;

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// The request never produced an HTTP response (network down, CORS, ...).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes one HTTP round-trip.
///
/// Implementations must hand back every status code as data; only failures
/// that leave no response at all are errors. No retries and no timeout are
/// expected. The returned future is not required to be `Send`, since the
/// browser transport is single-threaded.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}
