//! HTTP resource layer for the Tick v2 API.
//!
//! Authorization is an explicit first step: [`Authorizer::authorize`] trades a
//! username and password for an API token and tenant id, and only then is a
//! [`Session`] built around the result. All calls go through a [`Transport`],
//! which is `reqwest` in production.

mod auth;
mod client;
mod error;
pub mod resources;
mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
mod transport;

pub use auth::Authorizer;
pub use client::ResourceClient;
pub use error::ApiError;
pub use session::Session;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
