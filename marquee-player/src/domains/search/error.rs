use marquee_core::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The query is blank after trimming. Not a failure: the caller clears
    /// results instead of issuing a lookup.
    #[error("search query is empty")]
    EmptyQuery,
    #[error("search lookup failed: {0}")]
    Lookup(#[from] CatalogError),
}

impl SearchError {
    pub fn is_empty_query(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}
