//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{ApiError, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Default)]
struct StubState {
    routes: HashMap<String, HttpResponse>,
    requests: Vec<HttpRequest>,
}

/// Replays canned responses keyed by URL and records every request.
///
/// Clones share state, so a test can keep one handle for inspection after
/// handing another to a session. Unknown URLs answer `404` with a non-JSON
/// body.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    state: Arc<Mutex<StubState>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with status 200 and `body`.
    #[must_use]
    pub fn respond(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond_with_status(url, 200, body)
    }

    #[must_use]
    pub fn respond_with_status(
        self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.lock().routes.insert(
            url.into(),
            HttpResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.lock();
        let response = state
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            });
        state.requests.push(request);
        Ok(response)
    }
}
