//! Domain modules for the Marquee player
//!
//! Each domain owns one slice of view state and the logic that updates it.
//! The home and details controllers compose them.

pub mod details;
pub mod filter;
pub mod library;
pub mod search;
pub mod ui;
