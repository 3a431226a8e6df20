use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

use watchtower_lib::modules::provider::infrastructure::http_client::{
    HttpRequest, HttpResponse, HttpTransport,
};
use watchtower_lib::shared::errors::{AppError, AppResult};

struct Route {
    url_contains: String,
    /// Replies in order; the last one repeats
    replies: VecDeque<AppResult<HttpResponse>>,
}

/// Scripted upstream. Requests are matched by URL substring, first route wins.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<(Instant, HttpRequest)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, url_contains: &str, replies: Vec<AppResult<HttpResponse>>) -> Self {
        self.routes.lock().unwrap().push(Route {
            url_contains: url_contains.to_string(),
            replies: replies.into(),
        });
        self
    }

    pub fn json(self, url_contains: &str, body: Value) -> Self {
        self.script(url_contains, vec![Ok(HttpResponse::json(200, &body))])
    }

    pub fn status(self, url_contains: &str, status: u16, body: &str) -> Self {
        self.script(url_contains, vec![Ok(HttpResponse::new(status, body))])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    pub fn request_times(&self) -> Vec<Instant> {
        self.requests.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn calls_to(&self, url_contains: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.url.contains(url_contains))
            .count()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let url = request.url.clone();
        self.requests
            .lock()
            .unwrap()
            .push((Instant::now(), request));

        let mut routes = self.routes.lock().unwrap();
        let route = routes
            .iter_mut()
            .find(|route| url.contains(&route.url_contains))
            .ok_or_else(|| AppError::ExternalServiceError(format!("no route for {}", url)))?;

        if route.replies.len() > 1 {
            route.replies.pop_front().unwrap()
        } else {
            route.replies.front().cloned().unwrap()
        }
    }
}
