//! Catalog access for Marquee.
//!
//! [`CatalogService`] is the contract the interaction layer talks to. The
//! crate ships one implementation backed by the TMDB v3 REST API
//! ([`TmdbCatalog`]) and a decorator that retries transport failures
//! ([`RetryingCatalog`]). Provider payloads are converted into
//! `marquee-model` records at this boundary; nothing above it sees raw
//! response shapes.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod providers;
pub mod retry;

pub use catalog::CatalogService;
pub use error::{CatalogError, Result};
pub use marquee_model as model;
pub use providers::tmdb::{TmdbCatalog, TmdbSettings};
pub use retry::{RetryPolicy, RetryingCatalog};
