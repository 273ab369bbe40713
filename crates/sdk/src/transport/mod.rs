//! Transport layer for the Clarity SDK.

pub mod http;

pub use http::HttpTransport;
