pub mod rate_limit_client;
pub mod retry_policy;
pub mod transport;

pub use rate_limit_client::RateLimitClient;
pub use retry_policy::{is_retryable_status, RetryPolicy};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

#[cfg(test)]
pub use transport::MockHttpTransport;
