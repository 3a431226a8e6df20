pub mod content;
pub mod provider;
pub mod proxy;
