//! Sprint timeline rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{TimelineEvent, TimelineEventKind};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::helpers::{format_short_date, wrap_text};

/// Lines one event occupies: header, detail, trailing blank.
const EVENT_HEIGHT: usize = 3;

/// Build the display lines for one timeline event.
fn event_lines(event: &TimelineEvent, width: usize) -> Vec<Line<'static>> {
    let marker_color = match event.kind {
        TimelineEventKind::Milestone => CYAN_PRIMARY,
        TimelineEventKind::Leave => AMBER_WARNING,
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("● ", Style::default().fg(marker_color)),
        Span::styled(
            format!("{}  ", format_short_date(event.date)),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled(
            event.title.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ])];

    let detail = if event.developers.is_empty() {
        event.detail.clone()
    } else {
        format!("{} ({})", event.detail, event.developers.join(", "))
    };
    for wrapped in wrap_text(&detail, width.saturating_sub(10)) {
        lines.push(Line::from(Span::styled(
            format!("│         {}", wrapped),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::from(Span::styled(
        "│",
        Style::default().fg(BORDER_SUBTLE),
    )));
    lines
}

/// Render the timeline view
pub fn render_timeline(area: Rect, app: &mut App, frame: &mut Frame) {
    let block = Block::default()
        .title(" Sprint Timeline ")
        .title_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.timeline.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No timeline events",
            Style::default().fg(TEXT_MUTED),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    // Scroll by whole events, clamped so the last page stays full.
    let visible_events = (inner.height as usize / EVENT_HEIGHT).max(1);
    let max_scroll = app.timeline.len().saturating_sub(visible_events);
    app.timeline_scroll = app.timeline_scroll.min(max_scroll);

    let mut lines = Vec::new();
    for event in app.timeline.iter().skip(app.timeline_scroll) {
        lines.extend(event_lines(event, inner.width as usize));
        if lines.len() >= inner.height as usize {
            break;
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
