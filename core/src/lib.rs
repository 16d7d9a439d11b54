//! Client for the Scryfall card-metadata API's catalog endpoints.
//!
//! # Overview
//! Each accessor on [`Client`] issues a single `GET {base_url}/catalog/{name}`
//! and decodes the JSON body into a [`Catalog`]: the canonical URI, the
//! reported number of values, and the values themselves in server order.
//!
//! ```no_run
//! use scryfall_core::Client;
//!
//! # fn run() -> Result<(), scryfall_core::ApiError> {
//! let client = Client::builder().build()?;
//! let creature_types = client.get_creature_types_catalog()?;
//! println!("{} creature types", creature_types.total_values);
//! # Ok(()) }
//! ```
//!
//! # Design
//! - `Client` is stateless; it holds only its base URL, user agent and
//!   transport, all fixed at construction.
//! - Request building (`build_catalog_request`) and response parsing
//!   (`parse_catalog`) are pure. The network round-trip sits behind the
//!   [`Transport`] trait, with a `ureq`-backed default.
//! - Calls are blocking. A client-wide timeout, or a per-call deadline via
//!   `get_catalog_with_timeout`, aborts requests that take too long.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use catalog::{Catalog, CatalogKind, ScryfallError};
pub use client::Client;
pub use config::{
    ClientBuilder, DefaultTransport, IntoTransport, BASE_URL_ENV_VAR, DEFAULT_BASE_URL,
    DEFAULT_USER_AGENT,
};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
