//! Shared types for the waiter client
//!
//! Menu catalog, order payloads, seat numbering and price formatting
//! as exchanged with the restaurant backend.

pub mod money;
pub mod models;

// Re-exports
pub use models::{
    CatalogParseError, MenuEntry, OrderItem, OrderReceipt, OrderRequest, SEAT_CAPACITY,
    SeatNumber, parse_menu_response, seat_labels,
};
pub use money::{DEFAULT_CURRENCY_SYMBOL, format_price};
pub use rust_decimal::Decimal;
