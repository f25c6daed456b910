//! Order flow controller
//!
//! Catalog refresh: Idle -> Loading -> Loaded | Failed, Retry re-enters Loading.
//! Order placement, per submission: Selecting -> Submitting -> Confirmed | Rejected.
//! Orders are never retried automatically.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use shared::{MenuEntry, OrderReceipt, OrderRequest, SeatNumber, seat_labels};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::event::{FlowEvent, FlowHandle, UserAction};
use super::surface::{Dialog, FlowSurface};
use crate::catalog::CatalogStore;
use crate::error::{ClientError, ClientResult};
use crate::http::WaiterApi;
use crate::image::ImageLoader;
use crate::presenter::{ActivationHandler, ListPresenter};

/// Catalog refresh state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last refresh failed; the previous catalog, if any, stays displayed
    Failed { detail: String },
}

/// Identifies one order submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Submitting,
    Confirmed,
    Rejected,
}

/// Result of the most recently resolved submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub id: SubmissionId,
    pub menu_id: i64,
    pub seat: SeatNumber,
    pub phase: SubmissionPhase,
}

#[derive(Debug, Clone)]
struct InFlight {
    menu_id: i64,
    seat: SeatNumber,
}

/// Orchestrates catalog refresh and order placement
pub struct OrderFlowController<A: WaiterApi, S: FlowSurface> {
    api: Arc<A>,
    surface: S,
    store: CatalogStore,
    presenter: ListPresenter,
    refresh_state: RefreshState,
    /// Entry whose seat picker is open
    selecting: Option<MenuEntry>,
    in_flight: BTreeMap<SubmissionId, InFlight>,
    last_outcome: Option<SubmissionOutcome>,
    next_submission: u64,
    events_tx: mpsc::UnboundedSender<FlowEvent>,
    events_rx: mpsc::UnboundedReceiver<FlowEvent>,
    shutdown: CancellationToken,
}

impl<A: WaiterApi, S: FlowSurface> OrderFlowController<A, S> {
    pub fn new(
        api: A,
        surface: S,
        images: Arc<dyn ImageLoader>,
        currency_symbol: impl Into<String>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let handle = FlowHandle::new(events_tx.clone(), shutdown.clone());
        let on_activate: ActivationHandler = Arc::new(move |entry| handle.activate(entry));

        Self {
            api: Arc::new(api),
            surface,
            store: CatalogStore::new(),
            presenter: ListPresenter::new(currency_symbol, images, on_activate),
            refresh_state: RefreshState::Idle,
            selecting: None,
            in_flight: BTreeMap::new(),
            last_outcome: None,
            next_submission: 1,
            events_tx,
            events_rx,
            shutdown,
        }
    }

    /// Handle for posting user actions from surfaces
    pub fn handle(&self) -> FlowHandle {
        FlowHandle::new(self.events_tx.clone(), self.shutdown.clone())
    }

    pub fn refresh_state(&self) -> &RefreshState {
        &self.refresh_state
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn presenter(&self) -> &ListPresenter {
        &self.presenter
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn selecting(&self) -> Option<&MenuEntry> {
        self.selecting.as_ref()
    }

    pub fn in_flight_submissions(&self) -> usize {
        self.in_flight.len()
    }

    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Start a catalog refresh
    ///
    /// Ignored while a refresh is already in flight; returns whether a request
    /// was issued.
    pub fn refresh(&mut self) -> bool {
        if self.refresh_state == RefreshState::Loading {
            tracing::debug!("Refresh already in flight, ignoring");
            return false;
        }
        self.refresh_state = RefreshState::Loading;
        tracing::info!("Fetching menus");

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_menu().await;
            if tx.send(FlowEvent::CatalogLoaded(result)).is_err() {
                tracing::debug!("Order flow stopped, catalog response dropped");
            }
        });
        true
    }

    /// Apply a user action on the owner task
    pub fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Refresh | UserAction::Retry => {
                self.refresh();
            }
            UserAction::Dismiss => {
                tracing::debug!(state = ?self.refresh_state, "Load error dismissed");
            }
            UserAction::Activate(entry) => self.open_seat_picker(entry),
            UserAction::ChooseSeat { entry, seat } => {
                if self.selecting.take().is_none() {
                    tracing::debug!(
                        menu_id = entry.id(),
                        seat = %seat,
                        "No seat picker open, choice dropped"
                    );
                    return;
                }
                self.submit(entry, seat);
            }
            UserAction::CancelSeat => {
                if let Some(entry) = self.selecting.take() {
                    tracing::debug!(menu_id = entry.id(), "Seat selection cancelled");
                }
            }
        }
    }

    /// Wait for the next event and apply it
    ///
    /// Returns `false` once the flow has been shut down.
    pub async fn pump(&mut self) -> bool {
        let event = tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => None,
            event = self.events_rx.recv() => event,
        };
        match event {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Refresh on entry, then process events until shutdown
    pub async fn run(mut self) {
        self.refresh();
        while self.pump().await {}
        tracing::info!(in_flight = self.in_flight.len(), "Order flow stopped");
    }

    fn dispatch(&mut self, event: FlowEvent) {
        if self.shutdown.is_cancelled() {
            tracing::debug!("Order flow stopped, event dropped");
            return;
        }
        match event {
            FlowEvent::User(action) => self.handle_action(action),
            FlowEvent::CatalogLoaded(result) => self.on_catalog_loaded(result),
            FlowEvent::OrderResolved { id, result } => self.on_order_resolved(id, result),
        }
    }

    fn on_catalog_loaded(&mut self, result: ClientResult<Vec<MenuEntry>>) {
        match result {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "Menus loaded");
                self.store.replace(entries);
                self.refresh_state = RefreshState::Loaded;
                self.presenter.refresh(&self.store);
                self.surface.render(self.presenter.rows());

                if self.store.is_empty() {
                    tracing::warn!("No menu items found - empty response");
                    self.surface.present(Dialog::EmptyCatalog);
                }
            }
            Err(e) => {
                let detail = e.user_detail();
                tracing::error!(error = %e, "Failed to load menus");
                let message = match e {
                    ClientError::CatalogParse(_) => detail.clone(),
                    _ => format!("Failed to load menu\n{}", detail),
                };
                self.refresh_state = RefreshState::Failed { detail };
                self.surface.present(Dialog::LoadError { message });
            }
        }
    }

    fn open_seat_picker(&mut self, entry: MenuEntry) {
        tracing::debug!(menu_id = entry.id(), "Selecting seat");
        self.selecting = Some(entry.clone());
        self.surface.present(Dialog::SeatPicker {
            entry,
            labels: seat_labels(),
        });
    }

    fn submit(&mut self, entry: MenuEntry, seat: SeatNumber) -> SubmissionId {
        let id = SubmissionId(self.next_submission);
        self.next_submission += 1;

        let request = OrderRequest::single(&entry, seat);
        tracing::info!(submission = %id, menu_id = entry.id(), seat = %seat, "Submitting order");
        self.in_flight.insert(
            id,
            InFlight {
                menu_id: entry.id(),
                seat,
            },
        );

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.create_order(&request).await;
            if tx.send(FlowEvent::OrderResolved { id, result }).is_err() {
                tracing::debug!(submission = %id, "Order flow stopped, order response dropped");
            }
        });
        id
    }

    fn on_order_resolved(&mut self, id: SubmissionId, result: ClientResult<OrderReceipt>) {
        let Some(submission) = self.in_flight.remove(&id) else {
            tracing::warn!(submission = %id, "Response for unknown submission");
            return;
        };

        let phase = match result {
            Ok(receipt) => {
                tracing::info!(
                    submission = %id,
                    seat = %submission.seat,
                    order_id = ?receipt.order_id(),
                    "Order added"
                );
                self.surface.present(Dialog::OrderConfirmed {
                    seat: submission.seat,
                    receipt,
                });
                SubmissionPhase::Confirmed
            }
            Err(e) => {
                tracing::error!(
                    submission = %id,
                    seat = %submission.seat,
                    error = %e,
                    "Failed to add order"
                );
                self.surface.present(Dialog::OrderFailed {
                    seat: submission.seat,
                });
                SubmissionPhase::Rejected
            }
        };

        self.last_outcome = Some(SubmissionOutcome {
            id,
            menu_id: submission.menu_id,
            seat: submission.seat,
            phase,
        });
    }
}
