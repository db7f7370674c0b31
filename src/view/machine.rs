//! Launch list view state machine.
//!
//! Each activation starts a cycle: publish `Loading`, run the fetch sequence
//! on a spawned task, publish exactly one terminal state. The task is bound
//! to a [`CancellationToken`]; deactivation (or a newer activation) cancels it
//! and detaches the publisher, so a late completion is dropped silently.

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::FetchState;
use crate::error::FetchError;
use crate::models::RocketLaunch;
use crate::traits::LaunchProvider;

/// Receiving side of one activation cycle.
///
/// Yields `Loading` followed by at most one terminal state, then ends when
/// the cycle finishes or the view is deactivated.
#[derive(Debug)]
pub struct StateSubscription {
    rx: mpsc::UnboundedReceiver<FetchState>,
}

impl StateSubscription {
    /// Next published state, or `None` once the cycle is over.
    pub async fn recv(&mut self) -> Option<FetchState> {
        self.rx.recv().await
    }
}

/// Publishing side shared between the view and its cycle task.
#[derive(Debug)]
struct CycleSlot {
    tx: Option<mpsc::UnboundedSender<FetchState>>,
    current: FetchState,
}

#[derive(Debug, Clone)]
struct Publisher {
    cycle: u64,
    slot: Arc<Mutex<CycleSlot>>,
    token: CancellationToken,
}

impl Publisher {
    /// Publish unless the cycle was cancelled. Returns whether it was delivered.
    fn publish(&self, state: FetchState) -> bool {
        let Ok(mut slot) = self.slot.lock() else {
            return false;
        };
        if self.token.is_cancelled() {
            return false;
        }
        let Some(tx) = slot.tx.as_ref() else {
            return false;
        };

        debug!(cycle = self.cycle, state = state.label(), "Publishing view state");
        // A dropped subscriber only means nobody is rendering
        let _ = tx.send(state.clone());
        slot.current = state;
        true
    }

    /// Cancel and detach in one step under the slot lock, so any publish
    /// either completed before this or is refused after it.
    fn cancel(&self) {
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.token.cancel();
        slot.tx = None;
    }

    /// Detach after the terminal state so subscribers see the end of the cycle.
    fn close(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.tx = None;
        }
    }
}

struct ActiveCycle {
    publisher: Publisher,
    handle: JoinHandle<()>,
}

/// Drives the launch list through `Loading -> Success | Error`.
pub struct LaunchListView {
    provider: Arc<dyn LaunchProvider>,
    active: Option<ActiveCycle>,
    cycles: u64,
}

impl LaunchListView {
    pub fn new(provider: Arc<dyn LaunchProvider>) -> Self {
        Self {
            provider,
            active: None,
            cycles: 0,
        }
    }

    /// Start a fresh cycle, superseding any cycle still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) -> StateSubscription {
        self.deactivate();

        self.cycles += 1;
        let cycle = self.cycles;
        let (tx, rx) = mpsc::unbounded_channel();
        let publisher = Publisher {
            cycle,
            slot: Arc::new(Mutex::new(CycleSlot {
                tx: Some(tx),
                current: FetchState::Loading,
            })),
            token: CancellationToken::new(),
        };

        info!(cycle, "Launch list activated");
        publisher.publish(FetchState::Loading);

        let handle = tokio::spawn(run_cycle(self.provider.clone(), publisher.clone()));
        self.active = Some(ActiveCycle { publisher, handle });

        StateSubscription { rx }
    }

    /// Cancel the current cycle. Its pending result will never be published.
    pub fn deactivate(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        active.publisher.cancel();
        if !active.handle.is_finished() {
            debug!(cycle = active.publisher.cycle, "Cancelled in-flight launch fetch");
        }
        info!(cycle = active.publisher.cycle, "Launch list deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Last state published by the live cycle, `None` when inactive.
    pub fn current_state(&self) -> Option<FetchState> {
        let active = self.active.as_ref()?;
        let slot = active.publisher.slot.lock().ok()?;
        Some(slot.current.clone())
    }
}

impl Drop for LaunchListView {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// The fetch sequence for one cycle.
///
/// The first call may be answered from cache and its result is not shown;
/// only the forced refresh that follows is published. A failure of the first
/// call ends the cycle without attempting the second.
async fn run_cycle(provider: Arc<dyn LaunchProvider>, publisher: Publisher) {
    let token = publisher.token.clone();

    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!(cycle = publisher.cycle, "Dropping stale launch fetch");
            return;
        }
        outcome = fetch_sequence(provider.as_ref()) => outcome,
    };

    if let Err(e) = &outcome {
        info!(cycle = publisher.cycle, error_code = e.error_code(), "Launch fetch failed");
    }

    if publisher.publish(FetchState::from(outcome)) {
        publisher.close();
    }
}

async fn fetch_sequence(provider: &dyn LaunchProvider) -> Result<Vec<RocketLaunch>, FetchError> {
    let warm = provider.fetch(false).await?;
    debug!(count = warm.len(), "Cache-first fetch done, forcing refresh");
    provider.fetch(true).await
}
