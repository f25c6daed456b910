//! Waiter Client - menu browsing and order placement for service staff
//!
//! Loads the restaurant catalog from the waiter API, presents it as a list of
//! clickable rows and places single-item orders for a chosen seat.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod image;
pub mod logger;
pub mod presenter;

pub use catalog::CatalogStore;
pub use config::WaiterConfig;
pub use error::{ClientError, ClientResult};
pub use flow::{Dialog, FlowHandle, FlowSurface, OrderFlowController, RefreshState, UserAction};
pub use http::{NetworkWaiterApi, WaiterApi};
pub use image::{HttpImageLoader, ImageLoader, NoopImageLoader, Thumbnail};
pub use presenter::{ListPresenter, RenderedRow};

// Re-export shared types for convenience
pub use shared::{MenuEntry, OrderReceipt, OrderRequest, SeatNumber};
