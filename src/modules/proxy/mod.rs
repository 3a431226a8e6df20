// `/api/{provider}` reverse proxy with server-side credentials
pub mod commands;
pub mod forwarder;

pub use forwarder::ProxyForwarder;
