//! View-side state for the launch list.
//!
//! - [`FetchState`]: the three mutually exclusive states a render sink sees
//! - [`LaunchListView`]: the activation-scoped state machine that publishes them
//! - [`forward_states`]: pumps a cycle's states into a [`RenderSink`]

mod machine;
mod state;

pub use machine::{LaunchListView, StateSubscription};
pub use state::FetchState;

use crate::traits::RenderSink;

/// Deliver every state of one cycle to `sink`, returning how many were delivered.
pub async fn forward_states<S: RenderSink + ?Sized>(
    subscription: &mut StateSubscription,
    sink: &mut S,
) -> usize {
    let mut delivered = 0;
    while let Some(state) = subscription.recv().await {
        sink.on_state_change(&state);
        delivered += 1;
    }
    delivered
}
