//! Marquee player library
//!
//! The interaction layer of Marquee: debounced search, genre filtering,
//! shelves with scroll tracking and detail pages, driven by the home and
//! details controllers. Controllers own their state and talk to the catalog
//! only through [`marquee_core::CatalogService`], so they run the same under
//! the `marquee` binary, a UI shell, or a test with a scripted catalog.
//!
//! Notes
//! - Controllers are single-owner and are driven from one loop; no state is
//!   shared across threads.
//! - Async work is spawned on the ambient Tokio runtime.

pub mod cli;
/// Cancellable tasks and request generations shared by all views
pub mod common;
pub mod domains;
pub mod home;
pub mod settings;

pub use domains::details::DetailsController;
pub use home::{HomeController, HomeMode};
pub use settings::BrowseSettings;
