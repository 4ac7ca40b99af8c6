pub mod backend;
pub mod controller;

pub use backend::{HttpBackend, SummaryBackend};
pub use controller::{RequestController, ViewState};

pub mod prelude {
    pub use super::backend::{HttpBackend, SummaryBackend};
    pub use super::controller::{RequestController, ViewState};
    pub use pulse_core::{Article, ClientConfig, Error, QueryInput, RequestState, Result};
    pub use pulse_format::{format_summary, RenderLine, Segment};
}
