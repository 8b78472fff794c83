//! # ria-client
//!
//! Client library for the AUTO.RIA developers API: vehicle listing
//! search with a rich optional filter set, single-listing details, and
//! average-price lookups.
//!
//! The crate is organized around the request pipeline:
//! [`SearchFilter`] (validation) → [`query::encode`] (wire format) →
//! [`RiaClient`] (HTTP + error mapping) → [`SearchPage`] (normalized
//! result). [`CredentialStore`] holds the per-session API key.

pub mod client;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod query;
pub mod response;

pub use client::{RiaClient, BASE_URL, REQUEST_TIMEOUT};
pub use credentials::CredentialStore;
pub use error::{ClientError, ClientResult};
pub use filter::{
    AveragePriceQuery, SearchFilter, DEFAULT_CATEGORY, DEFAULT_COUNT_PER_PAGE, DEFAULT_CURRENCY,
    MAX_COUNT_PER_PAGE,
};
pub use query::{encode, encode_average_price, QueryParam};
pub use response::{SearchEnvelope, SearchPage};
