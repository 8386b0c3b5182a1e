//! Client for the UFT Academy content API.
//!
//! Every read endpoint is keyed by a [`Locale`] path segment and returns
//! loosely-shaped JSON. Decoding here is deliberately lenient: wrong types and
//! missing fields collapse to defaults instead of failing the request, so the
//! views only ever see "some data" or "no data".

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod locale;
pub mod shape;
pub mod types;

pub use client::ContentClient;
pub use config::ApiConfig;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use locale::Locale;
pub use types::*;
