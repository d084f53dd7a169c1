//! Home view: shelves, genre filter and the search overlay.

pub mod controller;
pub mod messages;
pub mod view;

pub use controller::HomeController;
pub use messages::HomeMessage;
pub use view::{HomeMode, HomeView, ShelfView};
