//! Render sink capability.

use crate::view::FetchState;

/// Receives each state published by a view state machine.
///
/// Called once with `Loading` when a cycle starts, then at most once with the
/// terminal `Success` or `Error`. Turning launches into text and colors is the
/// sink's business.
pub trait RenderSink {
    fn on_state_change(&mut self, state: &FetchState);
}
