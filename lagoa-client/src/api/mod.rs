//! Typed endpoint wrappers
//!
//! One impl block per resource: guests, products, orders, rooms, staff.
//! Every method unwraps the `{success, data, error}` envelope and returns
//! the payload or a [`ClientError`](crate::ClientError).

mod guests;
mod orders;
mod products;
mod rooms;
mod staff;

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Typed API surface over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct LagoaApi<C> {
    http: C,
}

impl LagoaApi<NetworkHttpClient> {
    /// Build a network-backed API client from configuration
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }
}

impl<C: HttpClient> LagoaApi<C> {
    /// Wrap an existing transport (tests use an in-memory one)
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Borrow the underlying transport (test doubles inspect their logs).
    pub fn transport(&self) -> &C {
        &self.http
    }
}
