//! Application state for the TUI.
//!
//! [`App`] owns the [`LaunchListView`] and is the [`RenderSink`] the run loop
//! feeds published states into. It holds no fetch logic of its own.

mod handlers;

pub use handlers::KeyOutcome;

use std::sync::Arc;

use crate::traits::{LaunchProvider, RenderSink};
use crate::ui::RenderContext;
use crate::view::{FetchState, LaunchListView, StateSubscription};

pub struct App {
    view: LaunchListView,
    /// Subscription of the latest cycle, until the run loop takes it
    pending: Option<StateSubscription>,
    /// Last state delivered to this sink
    pub state: FetchState,
    /// Index of the first visible launch
    pub scroll: usize,
    /// Animation tick, advanced by the run loop
    pub tick_count: u64,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(provider: Arc<dyn LaunchProvider>) -> Self {
        Self {
            view: LaunchListView::new(provider),
            pending: None,
            state: FetchState::Loading,
            scroll: 0,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Start (or restart) a load cycle. The new subscription is picked up
    /// through [`take_subscription`](Self::take_subscription).
    pub fn activate(&mut self) {
        self.pending = Some(self.view.activate());
        self.mark_dirty();
    }

    /// Stop the current cycle; nothing more will be delivered for it.
    pub fn deactivate(&mut self) {
        self.view.deactivate();
        self.pending = None;
    }

    pub fn take_subscription(&mut self) -> Option<StateSubscription> {
        self.pending.take()
    }

    pub fn is_active(&self) -> bool {
        self.view.is_active()
    }

    pub fn quit(&mut self) {
        self.deactivate();
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn scroll_down(&mut self) {
        let len = self.state.launches().map_or(0, <[_]>::len);
        if self.scroll + 1 < len {
            self.scroll += 1;
            self.mark_dirty();
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll > 0 {
            self.scroll -= 1;
            self.mark_dirty();
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            state: &self.state,
            scroll: self.scroll,
            tick: self.tick_count,
        }
    }
}

impl RenderSink for App {
    fn on_state_change(&mut self, state: &FetchState) {
        if state.is_loading() {
            self.scroll = 0;
        }
        self.state = state.clone();
        self.mark_dirty();
    }
}
