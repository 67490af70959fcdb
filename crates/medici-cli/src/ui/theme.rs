//! Colours for the terminal demo.

use medici_player::LineKind;
use ratatui::style::{Color, Modifier, Style};

/// Palette used by the renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) title: Color,
    pub(crate) border: Color,
    pub(crate) tab_active: Color,
    pub(crate) tab_inactive: Color,
    pub(crate) prompt: Color,
    pub(crate) input: Color,
    pub(crate) system: Color,
    pub(crate) response: Color,
    pub(crate) highlight: Color,
    pub(crate) source: Color,
    pub(crate) code: Color,
    pub(crate) caret: Color,
    pub(crate) muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::White,
            border: Color::DarkGray,
            tab_active: Color::Cyan,
            tab_inactive: Color::DarkGray,
            prompt: Color::Magenta,
            input: Color::White,
            system: Color::DarkGray,
            response: Color::Gray,
            highlight: Color::Green,
            source: Color::Cyan,
            code: Color::Yellow,
            caret: Color::White,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Base style for a revealed line of `kind`.
    pub(crate) fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::System => Style::default().fg(self.system),
            LineKind::Highlight => Style::default()
                .fg(self.highlight)
                .add_modifier(Modifier::BOLD),
            LineKind::SourceCitation => Style::default().fg(self.source),
            LineKind::PromptMarker => Style::default()
                .fg(self.prompt)
                .add_modifier(Modifier::BOLD),
            LineKind::UserInput => Style::default().fg(self.input),
            LineKind::Response | LineKind::Gap => Style::default().fg(self.response),
        }
    }
}
