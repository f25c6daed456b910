//! Flow events and the handle used to post them

use shared::{MenuEntry, OrderReceipt, SeatNumber};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::controller::SubmissionId;
use crate::error::ClientResult;

/// Something the user did on one of the flow's surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Reload the catalog
    Refresh,
    /// Retry after a load error
    Retry,
    /// Close the load error dialog without retrying
    Dismiss,
    /// A row was tapped; carries the entry that row was rendered from
    Activate(MenuEntry),
    /// A seat was picked for `entry`
    ChooseSeat { entry: MenuEntry, seat: SeatNumber },
    /// The seat picker was closed without a choice
    CancelSeat,
}

/// Event processed by the owner task
#[derive(Debug)]
pub(crate) enum FlowEvent {
    User(UserAction),
    CatalogLoaded(ClientResult<Vec<MenuEntry>>),
    OrderResolved {
        id: SubmissionId,
        result: ClientResult<OrderReceipt>,
    },
}

/// Cloneable sender for user actions
///
/// Held by surfaces and by row activation callbacks.
#[derive(Debug, Clone)]
pub struct FlowHandle {
    tx: mpsc::UnboundedSender<FlowEvent>,
    shutdown: CancellationToken,
}

impl FlowHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<FlowEvent>, shutdown: CancellationToken) -> Self {
        Self { tx, shutdown }
    }

    /// Post an action; silently dropped once the flow has stopped
    pub fn send(&self, action: UserAction) {
        if self.shutdown.is_cancelled() || self.tx.send(FlowEvent::User(action)).is_err() {
            tracing::debug!("Order flow stopped, action dropped");
        }
    }

    pub fn refresh(&self) {
        self.send(UserAction::Refresh);
    }

    pub fn retry(&self) {
        self.send(UserAction::Retry);
    }

    pub fn dismiss(&self) {
        self.send(UserAction::Dismiss);
    }

    pub fn activate(&self, entry: MenuEntry) {
        self.send(UserAction::Activate(entry));
    }

    pub fn choose_seat(&self, entry: MenuEntry, seat: SeatNumber) {
        self.send(UserAction::ChooseSeat { entry, seat });
    }

    /// Validate a raw seat number before posting the choice
    pub fn choose_seat_number(&self, entry: MenuEntry, seat: u8) -> ClientResult<()> {
        let seat = SeatNumber::new(seat)?;
        self.choose_seat(entry, seat);
        Ok(())
    }

    pub fn cancel_seat(&self) {
        self.send(UserAction::CancelSeat);
    }

    /// Stop the flow; completions arriving afterwards are discarded
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}
