//! Data models
//!
//! Wire types of the waiter API (`/waiter/menu`, `/waiter/orders`).

pub mod menu;
pub mod order;
pub mod seat;

// Re-exports
pub use menu::*;
pub use order::*;
pub use seat::*;
