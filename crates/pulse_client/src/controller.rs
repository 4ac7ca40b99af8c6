use std::sync::Arc;

use pulse_core::types::clamp_num_results;
use pulse_core::{QueryInput, RequestState, Result, SummarizeResponse, SummaryResult};
use pulse_format::{format_summary, RenderLine};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::SummaryBackend;

/// Everything the page shows. Each update replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub input: QueryInput,
    pub request_state: RequestState,
    pub result: SummaryResult,
    pub error: Option<String>,
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        self.request_state == RequestState::Pending
    }

    /// Summary text as formatted lines. Recomputed on every call.
    pub fn summary_lines(&self) -> Vec<RenderLine> {
        format_summary(&self.result.summary_text)
    }
}

/// Owns the view state and runs one summarize request per `submit`.
///
/// Callers are expected not to submit again while a request is pending.
/// If they do, both requests run and whichever finishes last decides what is
/// displayed.
pub struct RequestController {
    backend: Arc<dyn SummaryBackend>,
    state: watch::Sender<ViewState>,
}

impl RequestController {
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { backend, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| state.input.query = query);
    }

    /// Range control: keeps the stored count within the allowed bounds.
    pub fn set_num_results(&self, num_results: u32) {
        self.state
            .send_modify(|state| state.input.num_results = clamp_num_results(num_results));
    }

    /// Submits whatever input is currently stored.
    pub async fn submit_current(&self) {
        let input = self.state.borrow().input.clone();
        self.submit(input).await;
    }

    pub async fn submit(&self, input: QueryInput) {
        let request = input.to_request();

        self.state.send_modify(|state| {
            state.input = input;
            state.request_state = RequestState::Pending;
            state.result = SummaryResult::default();
            state.error = None;
        });
        info!(
            "📰 Summarizing {:?} ({} results) via {}",
            request.query,
            request.num_results,
            self.backend.name()
        );

        let outcome: Result<SummarizeResponse> = self.backend.summarize(&request).await;

        match outcome {
            Ok(response) => {
                let result = SummaryResult::from(response);
                let duplicates = result.duplicate_links();
                if !duplicates.is_empty() {
                    warn!("⚠️ Duplicate article links in response: {}", duplicates.join(", "));
                }
                info!("✨ Received summary with {} articles", result.articles.len());
                debug!("Summary text: {:?}", result.summary_text);
                self.state.send_modify(|state| {
                    state.result = result;
                    state.error = None;
                    state.request_state = RequestState::Succeeded;
                });
            }
            Err(e) => {
                let kind = if e.is_transport() { "transport" } else { "http" };
                let message = e.user_message();
                warn!("❌ Summarize request failed ({}): {}", kind, message);
                self.state.send_modify(|state| {
                    state.result = SummaryResult::default();
                    state.error = Some(message);
                    state.request_state = RequestState::Failed;
                });
            }
        }
    }
}
