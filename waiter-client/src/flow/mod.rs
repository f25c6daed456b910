//! Order flow - catalog refresh and order placement
//!
//! Everything that touches the catalog, the presenter or flow state runs on
//! the task owning [`OrderFlowController`]. Network calls run on spawned tasks
//! and report back through the controller's event channel.

mod controller;
mod event;
mod surface;

pub use controller::{
    OrderFlowController, RefreshState, SubmissionId, SubmissionOutcome, SubmissionPhase,
};
pub use event::{FlowHandle, UserAction};
pub use surface::{Dialog, FlowSurface};
