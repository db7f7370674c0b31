//! One bordered card per launch.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_NO_DATA, COLOR_SUCCESSFUL, COLOR_UNSUCCESSFUL,
};
use crate::models::{LaunchOutcome, RocketLaunch};

/// Rows taken by a card: four text lines plus the border.
pub const CARD_HEIGHT: u16 = 6;

/// Label and color for a launch outcome.
pub fn outcome_label(outcome: LaunchOutcome) -> (&'static str, ratatui::style::Color) {
    match outcome {
        LaunchOutcome::Successful => ("Successful", COLOR_SUCCESSFUL),
        LaunchOutcome::Unsuccessful => ("Unsuccessful", COLOR_UNSUCCESSFUL),
        LaunchOutcome::Unknown => ("No data", COLOR_NO_DATA),
    }
}

/// Text lines shown inside a launch card.
pub fn card_lines(launch: &RocketLaunch) -> Vec<Line<'static>> {
    let (label, color) = outcome_label(launch.outcome());
    vec![
        Line::from(vec![
            Span::raw("Launch name: "),
            Span::styled(
                launch.mission_name.clone(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(label, Style::default().fg(color)),
        Line::raw(format!("Launch year: {}", launch.launch_year)),
        Line::raw(format!(
            "Launch details: {}",
            launch.details.as_deref().unwrap_or("")
        )),
    ]
}

pub fn render_launch_card(frame: &mut Frame, area: Rect, launch: &RocketLaunch) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    frame.render_widget(Paragraph::new(card_lines(launch)).block(block), area);
}
