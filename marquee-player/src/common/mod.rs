pub mod slot;
pub mod task;

pub use slot::RequestSlot;
pub use task::{TaskHandle, ViewScope};
