//! Google Cloud Storage access for dripfeed.
//!
//! A deliberately small client over the GCS JSON API: the poster only ever
//! downloads two objects (the content calendar and the publication log) and
//! uploads one (the log). Token acquisition sits behind [`TokenProvider`] so
//! tests can point the client at a mock endpoint with a fixed token.

mod auth;
mod client;
mod error;

pub use auth::{ServiceAccountTokenProvider, StaticTokenProvider, TokenProvider};
pub use client::GcsClient;
pub use error::GcsError;
