//! Launch list rendering.
//!
//! Rendering is a pure function of [`FetchState`] plus the scroll offset and
//! animation tick; the app owns both.

mod launch_card;
mod states;
pub mod theme;

pub use launch_card::{card_lines, outcome_label, render_launch_card, CARD_HEIGHT};
pub use states::{render_empty, render_error, render_loading};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::models::RocketLaunch;
use crate::view::FetchState;
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub state: &'a FetchState,
    /// Index of the first visible launch
    pub scroll: usize,
    pub tick: u64,
}

/// Draw the full screen: title, body for the current state, key hints.
pub fn render(frame: &mut Frame, ctx: RenderContext<'_>) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, ctx.state);

    match ctx.state {
        FetchState::Loading => render_loading(frame, body, ctx.tick),
        FetchState::Success(launches) if launches.is_empty() => render_empty(frame, body),
        FetchState::Success(launches) => render_launch_list(frame, body, launches, ctx.scroll),
        FetchState::Error(e) => render_error(frame, body, e),
    }

    frame.render_widget(
        Line::styled("q quit  r reload  j/k scroll", Style::default().fg(COLOR_DIM)),
        footer,
    );
}

fn render_header(frame: &mut Frame, area: Rect, state: &FetchState) {
    let mut spans = vec![Span::styled(
        "SpaceX Launches",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(launches) = state.launches() {
        spans.push(Span::styled(
            format!("  {} launches", launches.len()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Line::from(spans), area);
}

/// How many cards fit in `height` rows.
pub fn visible_cards(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

/// Render launches starting at `scroll`, as many as fit.
pub fn render_launch_list(frame: &mut Frame, area: Rect, launches: &[RocketLaunch], scroll: usize) {
    let start = scroll.min(launches.len().saturating_sub(1));
    let mut y = area.y;

    for launch in &launches[start..] {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let card = Rect::new(area.x, y, area.width, CARD_HEIGHT.min(remaining));
        render_launch_card(frame, card, launch);
        y += card.height;
    }
}
