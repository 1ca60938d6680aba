//! Metric and summary card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::metrics::AggregateMetrics;
use crate::models::Sprint;
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BLUE_INFO, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, RED_ERROR,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};

use super::helpers::format_percent;

/// One bordered card: big value, uppercase label, muted caption.
fn render_card(area: Rect, value: String, label: &str, caption: String, accent: Color, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(vec![Span::styled(
            value,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(label, Style::default().fg(TEXT_MUTED))]),
        Line::from(vec![Span::styled(
            caption,
            Style::default().fg(TEXT_SECONDARY),
        )]),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the four headline metric cards in a given area
pub fn render_metric_cards(area: Rect, metrics: &AggregateMetrics, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        card_layout[0],
        format!("{} SP", metrics.actual_velocity),
        "TEAM VELOCITY",
        "story points completed".to_string(),
        GREEN_SUCCESS,
        frame,
    );
    render_card(
        card_layout[1],
        format!("{} SP", metrics.effective_velocity),
        "EFFECTIVE VELOCITY",
        "after bug impact".to_string(),
        AMBER_WARNING,
        frame,
    );
    render_card(
        card_layout[2],
        format_percent(metrics.utilization_rate),
        "TEAM UTILIZATION",
        format!(
            "{}/{} SP capacity",
            metrics.planned_velocity, metrics.total_available_capacity
        ),
        BLUE_INFO,
        frame,
    );
    render_card(
        card_layout[3],
        format_percent(metrics.bug_impact),
        "BUG IMPACT",
        "of completed effort".to_string(),
        RED_ERROR,
        frame,
    );
}

/// Render the roster summary cards in a given area
pub fn render_summary_cards(
    area: Rect,
    sprint: &Sprint,
    metrics: &AggregateMetrics,
    frame: &mut Frame,
) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let on_leave = sprint.on_leave_count();
    render_card(
        card_layout[0],
        sprint.developers.len().to_string(),
        "ACTIVE DEVELOPERS",
        "on the sprint roster".to_string(),
        CYAN_PRIMARY,
        frame,
    );
    render_card(
        card_layout[1],
        format!("{} SP", metrics.total_available_capacity),
        "AVAILABLE CAPACITY",
        "after leave adjustment".to_string(),
        GREEN_SUCCESS,
        frame,
    );
    render_card(
        card_layout[2],
        on_leave.to_string(),
        "ON LEAVE",
        "during this sprint".to_string(),
        if on_leave > 0 { AMBER_WARNING } else { CYAN_PRIMARY },
        frame,
    );
    render_card(
        card_layout[3],
        format_percent(metrics.success_rate()),
        "SUCCESS RATE",
        "effective vs planned".to_string(),
        CYAN_PRIMARY,
        frame,
    );
}
