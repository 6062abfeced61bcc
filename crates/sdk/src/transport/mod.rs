//! Transport layer for the Supavec SDK.

pub mod http;

pub use http::HttpTransport;
