//! Launch provider that replays queued outcomes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::{FetchError, NetworkError};
use crate::models::RocketLaunch;
use crate::traits::LaunchProvider;

struct Step {
    outcome: Result<Vec<RocketLaunch>, FetchError>,
    gate: Option<Arc<Notify>>,
}

/// Provider returning pre-scripted results in call order.
///
/// Every call records its `force_refresh` flag. A step pushed with
/// [`push_gated`](Self::push_gated) does not resolve until its gate is
/// notified, which lets a test hold a fetch in flight.
#[derive(Default)]
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<bool>>,
    call_made: Notify,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome.
    pub fn push_launches(&self, launches: Vec<RocketLaunch>) {
        self.push(Ok(launches), None);
    }

    /// Queue a failure.
    pub fn push_error(&self, error: FetchError) {
        self.push(Err(error), None);
    }

    /// Queue an outcome held back until the returned gate is notified.
    pub fn push_gated(&self, outcome: Result<Vec<RocketLaunch>, FetchError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(outcome, Some(gate.clone()));
        gate
    }

    fn push(&self, outcome: Result<Vec<RocketLaunch>, FetchError>, gate: Option<Arc<Notify>>) {
        self.steps.lock().unwrap().push_back(Step { outcome, gate });
    }

    /// `force_refresh` flags of every call so far, in order.
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Wait until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let notified = self.call_made.notified();
            if self.call_count() >= n {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl LaunchProvider for ScriptedProvider {
    async fn fetch(&self, force_refresh: bool) -> Result<Vec<RocketLaunch>, FetchError> {
        self.calls.lock().unwrap().push(force_refresh);
        let step = self.steps.lock().unwrap().pop_front();
        self.call_made.notify_waiters();

        let Some(step) = step else {
            return Err(NetworkError::Other {
                message: "no scripted outcome left".to_string(),
            }
            .into());
        };

        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.outcome
    }
}
