//! Rendering logic for the TUI.
//!
//! One frame is a header (title and tab row), the bordered transcript and
//! a one-line footer. Every transcript entry occupies exactly one row.

use super::Theme;
use super::state::App;
use medici_player::markup::{self, SpanStyle};
use medici_player::{Entry, LineKind, Phase};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const CARET: &str = "█";

fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2), // Title + tabs
        Constraint::Min(0),    // Transcript
        Constraint::Length(1), // Footer
    ])
    .areas(area)
}

fn transcript_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
}

/// Rows available to the transcript inside a frame of `area`.
pub(crate) fn body_area(area: Rect) -> Rect {
    let [_, body, _] = split(area);
    transcript_block(&Theme::default()).inner(body)
}

/// Render the full frame.
pub(crate) fn render_frame(frame: &mut Frame, app: &App) {
    let theme = Theme::default();
    let [header, body, footer] = split(frame.area());

    render_header(frame, header, app, &theme);
    render_transcript(frame, body, app, &theme);
    render_footer(frame, footer, app, &theme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Line::from(Span::styled(
        format!(" {}", app.title),
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    ));

    let tabs = app.player.indicator();
    let mut spans = vec![Span::raw(" ")];
    for (i, label) in tabs.labels().iter().enumerate() {
        let style = if tabs.is_active(i) {
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.tab_inactive)
        };
        spans.push(Span::styled(
            format!(" {} {label} ", i.saturating_add(1)),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(vec![title, Line::from(spans)]), area);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = transcript_block(theme);
    let rows = usize::from(block.inner(area).height);
    let surface = app.player.surface();
    let caret_on = app.caret_visible();

    let lines: Vec<Line<'_>> = surface
        .entries()
        .iter()
        .map(|entry| entry_line(entry, theme, caret_on))
        .collect();

    // Keep the anchored entry on the last visible row.
    let shown = surface.scroll_anchor().map_or(0, |id| id.0.saturating_add(1));
    let offset = u16::try_from(shown.saturating_sub(rows)).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
}

/// One transcript row. Hidden entries keep their row but show nothing.
fn entry_line<'a>(entry: &'a Entry, theme: &Theme, caret_on: bool) -> Line<'a> {
    if !entry.visible {
        return Line::default();
    }

    let base = theme.line_style(entry.kind);
    let mut spans = Vec::new();

    match entry.kind {
        LineKind::Gap => return Line::default(),
        LineKind::PromptMarker => {
            if let Some(prompt) = &entry.prompt {
                spans.push(Span::styled(prompt.as_str(), base));
            }
            spans.push(Span::styled(
                entry.text.as_str(),
                theme.line_style(LineKind::UserInput),
            ));
            if entry.caret {
                spans.push(Span::styled(CARET, Style::default().fg(theme.caret)));
            }
        },
        _ => {
            for span in markup::parse(&entry.text) {
                let style = match span.style {
                    SpanStyle::Plain => base,
                    SpanStyle::Strong => base.add_modifier(Modifier::BOLD),
                    SpanStyle::Code => Style::default().fg(theme.code),
                };
                spans.push(Span::styled(span.text, style));
            }
        },
    }

    if entry.trailing_caret && caret_on {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(CARET, Style::default().fg(theme.caret)));
    }

    Line::from(spans)
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "waiting",
        Phase::Typing { .. } => "typing",
        Phase::Settling => "playing",
        Phase::Done => "done",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let count = app.player.scenarios().len();
    let hints = format!(
        " 1-{count} select  ←/→ switch  r replay  q quit  · {}",
        phase_label(app.player.phase())
    );
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.muted))),
        area,
    );
}
