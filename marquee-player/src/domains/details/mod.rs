//! Details domain: the detail page of one title.
//!
//! Opening a title issues three independent lookups (details, cast and
//! videos). Each feeds its own state slot, so a slow response for a title
//! that has since been replaced is dropped on arrival.

pub mod controller;
pub mod messages;
pub mod types;

pub use controller::DetailsController;
pub use messages::DetailsMessage;
pub use types::DetailsState;
