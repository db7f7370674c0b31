//! Color theme constants

use ratatui::style::Color;

/// Card borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title bar and mission names
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text (key hints, labels)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Launch succeeded
pub const COLOR_SUCCESSFUL: Color = Color::Rgb(76, 175, 80);

/// Launch failed
pub const COLOR_UNSUCCESSFUL: Color = Color::Rgb(244, 67, 54);

/// No verdict available
pub const COLOR_NO_DATA: Color = Color::Gray;

/// Error message text
pub const COLOR_ERROR: Color = Color::LightRed;
