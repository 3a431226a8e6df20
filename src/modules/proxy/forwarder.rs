//! Reverse proxy from `/api/{provider}/...` to the provider APIs.
//!
//! The prefix is stripped, credentials are added server-side and the upstream
//! status and body are returned as received.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::modules::content::ContentProvider;
use crate::modules::provider::infrastructure::adapters::trakt::TRAKT_API_VERSION;
use crate::modules::provider::infrastructure::http_client::{
    HttpRequest, HttpResponse, HttpTransport,
};
use crate::shared::config::UpstreamEndpoints;
use crate::shared::errors::{AppError, AppResult};

/// Request headers never copied to the upstream request
const SKIPPED_HEADERS: [&str; 12] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
    "accept-encoding",
    "origin",
];

/// Headers owned by the proxy for Trakt requests
const TRAKT_HEADERS: [&str; 2] = ["trakt-api-key", "trakt-api-version"];

pub struct ProxyForwarder {
    transport: Arc<dyn HttpTransport>,
    endpoints: UpstreamEndpoints,
    tmdb_api_key: Option<String>,
    trakt_api_key: Option<String>,
}

impl ProxyForwarder {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoints: UpstreamEndpoints,
        tmdb_api_key: Option<String>,
        trakt_api_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            endpoints,
            tmdb_api_key,
            trakt_api_key,
        }
    }

    fn base_url(&self, provider: ContentProvider) -> &str {
        let base = match provider {
            ContentProvider::AniList => &self.endpoints.anilist,
            ContentProvider::Jikan => &self.endpoints.jikan,
            ContentProvider::Tmdb => &self.endpoints.tmdb,
            ContentProvider::Trakt => &self.endpoints.trakt,
        };
        base.trim_end_matches('/')
    }

    /// Translate an incoming REST request into the upstream request.
    ///
    /// `path` is the part after `/api/{provider}`, `raw_query` the undecoded
    /// query string.
    pub fn build_rest_request(
        &self,
        provider: ContentProvider,
        method: Method,
        path: &str,
        raw_query: Option<&str>,
        headers: &HeaderMap,
        body: Bytes,
    ) -> HttpRequest {
        let mut url = format!("{}{}", self.base_url(provider), path);

        // Client-supplied TMDB keys are replaced by the server's
        let query: Vec<&str> = raw_query
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                provider != ContentProvider::Tmdb || pair.split('=').next() != Some("api_key")
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        let mut request = HttpRequest::new(method, url);
        for (name, value) in headers {
            let name = name.as_str();
            if SKIPPED_HEADERS.contains(&name)
                || (provider == ContentProvider::Trakt && TRAKT_HEADERS.contains(&name))
            {
                continue;
            }
            if let Ok(value) = value.to_str() {
                request = request.header(name, value);
            }
        }

        match provider {
            ContentProvider::Tmdb => {
                if let Some(api_key) = &self.tmdb_api_key {
                    request = request.query("api_key", api_key.clone());
                }
            }
            ContentProvider::Trakt => {
                if request.header_value("content-type").is_none() {
                    request = request.header("Content-Type", "application/json");
                }
                request = request.header("trakt-api-version", TRAKT_API_VERSION);
                if let Some(api_key) = &self.trakt_api_key {
                    request = request.header("trakt-api-key", api_key.clone());
                }
            }
            ContentProvider::AniList | ContentProvider::Jikan => {}
        }

        if !body.is_empty() {
            request = request.body(body.to_vec());
        }
        request
    }

    /// Re-serialize an AniList GraphQL body into a fresh JSON POST
    pub fn build_anilist_request(&self, body: &[u8]) -> AppResult<HttpRequest> {
        let payload: Value = serde_json::from_slice(body).map_err(|e| {
            AppError::InvalidInput(format!("AniList request body is not JSON: {}", e))
        })?;

        Ok(HttpRequest::post_json(self.base_url(ContentProvider::AniList), &payload)
            .header("Accept", "application/json"))
    }

    pub async fn forward_rest(
        &self,
        provider: ContentProvider,
        method: Method,
        path: &str,
        raw_query: Option<&str>,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Response {
        let request = self.build_rest_request(provider, method, path, raw_query, headers, body);
        self.send(provider, request).await
    }

    pub async fn forward_anilist(&self, body: &[u8]) -> Response {
        match self.build_anilist_request(body) {
            Ok(request) => self.send(ContentProvider::AniList, request).await,
            Err(e) => {
                log::error!("[Proxy] AniList: {}", e);
                proxy_error(ContentProvider::AniList)
            }
        }
    }

    async fn send(&self, provider: ContentProvider, request: HttpRequest) -> Response {
        log::debug!(
            "[Proxy] {} {} {}",
            provider.display_name(),
            request.method,
            request.url
        );

        match self.transport.send(request).await {
            Ok(upstream) => upstream_response(upstream),
            Err(e) => {
                log::error!("[Proxy] {} forwarding failed: {}", provider.display_name(), e);
                proxy_error(provider)
            }
        }
    }
}

/// Pass the upstream status, content type and body through
fn upstream_response(upstream: HttpResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, upstream.body).into_response();

    if let Some(content_type) = upstream
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
    {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}

/// `500 {"error": "<Provider> proxy error"}`
pub fn proxy_error(provider: ContentProvider) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("{} proxy error", provider.display_name()) })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::infrastructure::http_client::MockHttpTransport;

    fn forwarder() -> ProxyForwarder {
        ProxyForwarder::new(
            Arc::new(MockHttpTransport::new()),
            UpstreamEndpoints::default(),
            Some("server-tmdb".to_string()),
            Some("server-trakt".to_string()),
        )
    }

    #[test]
    fn test_tmdb_key_replaces_client_key() {
        let request = forwarder().build_rest_request(
            ContentProvider::Tmdb,
            Method::GET,
            "/movie/550",
            Some("api_key=client&language=en-US"),
            &HeaderMap::new(),
            Bytes::new(),
        );

        assert_eq!(
            request.url,
            "https://api.themoviedb.org/3/movie/550?language=en-US"
        );
        assert_eq!(request.query_value("api_key"), Some("server-tmdb"));
    }

    #[test]
    fn test_trakt_headers_are_injected() {
        let mut headers = HeaderMap::new();
        headers.insert("trakt-api-key", HeaderValue::from_static("client"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost:5000"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let request = forwarder().build_rest_request(
            ContentProvider::Trakt,
            Method::GET,
            "/movies/trending",
            None,
            &headers,
            Bytes::new(),
        );

        assert_eq!(request.url, "https://api.trakt.tv/movies/trending");
        assert_eq!(request.header_value("trakt-api-key"), Some("server-trakt"));
        assert_eq!(request.header_value("trakt-api-version"), Some("2"));
        assert_eq!(request.header_value("host"), None);
        assert_eq!(request.header_value("accept"), Some("application/json"));
        assert_eq!(
            request.headers.iter().filter(|(k, _)| k == "trakt-api-key").count(),
            1
        );
    }

    #[test]
    fn test_jikan_query_is_kept_verbatim() {
        let request = forwarder().build_rest_request(
            ContentProvider::Jikan,
            Method::GET,
            "/top/anime",
            Some("filter=airing&limit=20"),
            &HeaderMap::new(),
            Bytes::new(),
        );
        assert_eq!(
            request.url,
            "https://api.jikan.moe/v4/top/anime?filter=airing&limit=20"
        );
    }

    #[test]
    fn test_anilist_body_must_be_json() {
        let forwarder = forwarder();
        assert!(forwarder.build_anilist_request(b"not json").is_err());

        let request = forwarder
            .build_anilist_request(br#"{ "query": "{ Page { pageInfo { total } } }" }"#)
            .unwrap();
        assert_eq!(request.url, "https://graphql.anilist.co");
        assert_eq!(request.header_value("content-type"), Some("application/json"));
    }
}
