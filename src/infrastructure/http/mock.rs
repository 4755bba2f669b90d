use super::{HttpDoer, HttpRequest, HttpResponse, TransportError};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::{Mutex, MutexGuard};

enum CannedReply {
    Respond(HttpResponse),
    Fail(String),
}

impl CannedReply {
    fn replay(&self) -> Result<HttpResponse, TransportError> {
        match self {
            Self::Respond(response) => Ok(response.clone()),
            Self::Fail(message) => Err(TransportError::new(message.clone())),
        }
    }
}

/// In-memory [`HttpDoer`] serving canned replies matched on method and URL.
///
/// Replies registered for the same route are served in registration order and
/// the last one repeats once the others are used up. Every request is recorded,
/// including requests with no matching route, which fail as transport errors.
#[derive(Default)]
pub struct MockHttpDoer {
    routes: Mutex<Vec<(Method, String, Vec<CannedReply>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpDoer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, url: &str, status: StatusCode, body: impl Into<Vec<u8>>) {
        self.push(method, url, CannedReply::Respond(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: Method, url: &str, message: &str) {
        self.push(method, url, CannedReply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn requests_to(&self, method: Method, url: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.url == url)
            .collect()
    }

    fn push(&self, method: Method, url: &str, reply: CannedReply) {
        let mut routes = lock(&self.routes);
        match routes.iter_mut().find(|(m, u, _)| *m == method && u == url) {
            Some((_, _, replies)) => replies.push(reply),
            None => routes.push((method, url.to_string(), vec![reply])),
        }
    }
}

// A poisoned lock only means another test thread panicked; the data is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl HttpDoer for MockHttpDoer {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request.clone());

        let mut routes = lock(&self.routes);
        let replies = routes
            .iter_mut()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, replies)| replies);

        match replies {
            Some(replies) if replies.len() > 1 => replies.remove(0).replay(),
            Some(replies) => replies[0].replay(),
            None => Err(TransportError::new(format!(
                "no mocked route for {} {}",
                request.method, request.url
            ))),
        }
    }
}
