//! UI surfaces driven by the flow

use shared::{MenuEntry, OrderReceipt, SeatNumber};

use crate::presenter::RenderedRow;

/// Dialogs the flow asks the UI to show
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Catalog could not be loaded; offers Retry and Dismiss
    LoadError { message: String },
    /// Catalog loaded but has no entries; informational only
    EmptyCatalog,
    /// Seat choices for `entry`, plus Cancel
    SeatPicker { entry: MenuEntry, labels: Vec<String> },
    /// Order accepted by the server
    OrderConfirmed { seat: SeatNumber, receipt: OrderReceipt },
    /// Order rejected or never reached the server
    OrderFailed { seat: SeatNumber },
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoadError { .. } => "Loading Error",
            Self::EmptyCatalog => "No Items",
            Self::SeatPicker { .. } => "Select Seat",
            Self::OrderConfirmed { .. } => "Success",
            Self::OrderFailed { .. } => "Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::LoadError { message } => message.clone(),
            Self::EmptyCatalog => {
                "No menu items available. Check if admin has added any items.".to_string()
            }
            Self::SeatPicker { entry, .. } => format!("Order {} for which seat?", entry.name()),
            Self::OrderConfirmed { seat, .. } => format!("Order added to {}", seat.label()),
            Self::OrderFailed { .. } => "Failed to add order".to_string(),
        }
    }

    /// Whether the dialog offers a Retry action
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LoadError { .. })
    }
}

/// Collaborator owning the list view and dialogs
pub trait FlowSurface: Send {
    /// Replace the visible list with `rows`
    fn render(&mut self, rows: &[RenderedRow]);

    /// Show a dialog
    fn present(&mut self, dialog: Dialog);
}
