//! Recommendations panel rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::recommend::{PLANNING_TIPS, Priority, Recommendation, RecommendationKind};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BLUE_INFO, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, RED_ERROR,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::helpers::wrap_text;

fn kind_color(kind: RecommendationKind) -> Color {
    match kind {
        RecommendationKind::Success => GREEN_SUCCESS,
        RecommendationKind::Info => BLUE_INFO,
        RecommendationKind::Warning => AMBER_WARNING,
        RecommendationKind::Alert => RED_ERROR,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => RED_ERROR,
        Priority::Medium => AMBER_WARNING,
        Priority::Low => GREEN_SUCCESS,
    }
}

/// Render the insights panel: fired rules first, planning tips below
pub fn render_recommendations(area: Rect, recommendations: &[Recommendation], frame: &mut Frame) {
    let block = Block::default()
        .title(" Insights & Recommendations ")
        .title_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wrap_width = inner.width.saturating_sub(3) as usize;
    let mut lines = Vec::new();

    if recommendations.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing flagged for this sprint",
            Style::default().fg(TEXT_MUTED),
        )));
        lines.push(Line::from(""));
    }

    for rec in recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", rec.kind.marker()),
                Style::default().fg(kind_color(rec.kind)),
            ),
            Span::styled(
                rec.title.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", rec.priority.label()),
                Style::default().fg(priority_color(rec.priority)),
            ),
        ]));
        for wrapped in wrap_text(&rec.detail, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("   {}", wrapped),
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        " Planning tips",
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    for tip in PLANNING_TIPS {
        lines.push(Line::from(Span::styled(
            format!("   - {}", tip),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
