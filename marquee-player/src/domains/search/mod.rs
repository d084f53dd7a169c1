//! Search domain: debounced free-text lookups feeding the search overlay.

pub mod debouncer;
pub mod error;
pub mod types;

pub use debouncer::SearchDebouncer;
pub use error::SearchError;
pub use types::SearchState;
