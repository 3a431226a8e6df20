#![allow(dead_code)]

pub mod fake_transport;
pub mod helpers;

pub use fake_transport::FakeTransport;
