//! Loading, empty and error screens
//!
//! Each is a short block of text centred in the body area.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};
use crate::error::FetchError;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn render_centered(frame: &mut Frame, area: Rect, text: Text<'static>) {
    let text_height = text.height() as u16;
    let y_offset = area.height.saturating_sub(text_height) / 2;
    let centered = Rect::new(
        area.x,
        area.y + y_offset,
        area.width,
        text_height.min(area.height),
    );

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered);
}

pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let spinner = SPINNER[(tick % SPINNER.len() as u64) as usize];
    let text = Text::from(Line::styled(
        format!("{} Loading launches...", spinner),
        Style::default().fg(COLOR_ACCENT),
    ));
    render_centered(frame, area, text);
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::styled("No launches", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("press r to reload", Style::default().fg(COLOR_DIM)),
    ]);
    render_centered(frame, area, text);
}

pub fn render_error(frame: &mut Frame, area: Rect, error: &FetchError) {
    let text = Text::from(vec![
        Line::styled(
            error.user_message(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            error.category().recovery_hint(),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    render_centered(frame, area, text);
}
