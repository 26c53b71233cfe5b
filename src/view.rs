//! View state for the scan-result screen.
//!
//! One state machine per screen: `Loading → {Ready, Failed}`. Every call to
//! [`AssetDetailView::show`] resets to `Loading` and bumps a generation
//! counter; a lookup that finishes after a newer one has started is
//! discarded instead of overwriting the newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::models::AssetModel;
use crate::resolver::{AssetLookup, Resolver};

#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Ready(AssetModel),
    Failed(AppError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

pub struct AssetDetailView<L: AssetLookup + 'static> {
    resolver: Arc<Resolver<L>>,
    generation: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<ViewState>>,
}

impl<L: AssetLookup + 'static> AssetDetailView<L> {
    pub fn new(resolver: Resolver<L>) -> Self {
        let (state_tx, _) = watch::channel(ViewState::Loading);
        Self {
            resolver: Arc::new(resolver),
            generation: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Watch state transitions; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.state_tx.borrow().clone()
    }

    /// Start loading `raw_param`, superseding any in-flight load.
    ///
    /// The returned handle completes when this load settles or is
    /// discarded; it exists for tests and CLI sequencing, the view itself
    /// does not need it.
    pub fn show(&self, raw_param: &str) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(ViewState::Loading);

        let raw_param = raw_param.to_string();
        let resolver = self.resolver.clone();
        let current_generation = self.generation.clone();
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            let next = match resolver.resolve(&raw_param).await {
                Ok(asset) => ViewState::Ready(asset),
                Err(err) => ViewState::Failed(err),
            };

            // The generation check and the write happen under the watch
            // lock so a newer load cannot be interleaved between them.
            state_tx.send_if_modified(|state| {
                if current_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(%raw_param, "discarding stale lookup result");
                    return false;
                }
                *state = next;
                true
            });
        })
    }
}
