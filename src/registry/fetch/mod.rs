//! Repository index fetching over HTTP.

pub mod http;

pub use http::{FetchError, HttpFetcher, DEFAULT_TIMEOUT};
