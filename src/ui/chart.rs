//! Velocity comparison and team capacity rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::metrics::{self, AggregateMetrics};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BLUE_INFO, BORDER_SUBTLE, GREEN_SUCCESS, RED_ERROR,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, status_color,
};

use super::helpers::format_percent;

/// Scale a value against the chart maximum to a gauge percentage.
fn scale_percent(value: u64, max: u64) -> u16 {
    if max == 0 {
        return 0;
    }
    (value * 100 / max).min(100) as u16
}

/// One labeled bar row: name on the left, gauge filling the rest.
fn render_bar_row(area: Rect, name: &str, value: i64, max: u64, color: Color, frame: &mut Frame) {
    let row_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(11), Constraint::Min(10)])
        .split(area);

    let label = Paragraph::new(Span::styled(name, Style::default().fg(TEXT_SECONDARY)));
    frame.render_widget(label, row_layout[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(BG_TERTIARY))
        .percent(scale_percent(value.max(0) as u64, max))
        .label(Span::styled(
            format!("{} SP", value),
            Style::default().fg(TEXT_PRIMARY),
        ));
    frame.render_widget(gauge, row_layout[1]);
}

/// Render the planned/actual/effective velocity comparison
pub fn render_velocity_section(area: Rect, metrics: &AggregateMetrics, frame: &mut Frame) {
    let block = Block::default()
        .title(" Velocity ")
        .title_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Effective velocity never exceeds actual, so the scale is the
    // larger of planned and actual.
    let max = u64::from(metrics.planned_velocity.max(metrics.actual_velocity)).max(1);

    render_bar_row(
        rows[0],
        " Planned",
        i64::from(metrics.planned_velocity),
        max,
        BLUE_INFO,
        frame,
    );
    render_bar_row(
        rows[1],
        " Actual",
        i64::from(metrics.actual_velocity),
        max,
        GREEN_SUCCESS,
        frame,
    );
    let effective_color = if metrics.effective_velocity < 0 {
        RED_ERROR
    } else {
        AMBER_WARNING
    };
    render_bar_row(
        rows[2],
        " Effective",
        metrics.effective_velocity,
        max,
        effective_color,
        frame,
    );

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} SP", metrics.total_bug_points),
            Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " of completed work went to bugs",
            Style::default().fg(TEXT_MUTED),
        ),
    ]));
    frame.render_widget(footer, rows[4]);
}

/// Render the team capacity gauge with its status line
pub fn render_capacity_section(area: Rect, metrics: &AggregateMetrics, frame: &mut Frame) {
    let block = Block::default()
        .title(" Team Capacity ")
        .title_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let status = metrics::capacity_status(metrics.utilization_rate);
    let accent = status_color(status);

    // The gauge caps at 100%; the label still carries the true figure
    // when a team runs past its capacity.
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(BG_TERTIARY))
        .percent(metrics.utilization_rate.round().clamp(0.0, 100.0) as u16)
        .label(Span::styled(
            format_percent(metrics.utilization_rate),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[0]);

    let status_line = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}", status.description()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} of {} SP used", metrics.actual_velocity, metrics.total_capacity),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]));
    frame.render_widget(status_line, rows[2]);

    let breakdown = Paragraph::new(Span::styled(
        format!(
            " Total {} SP   Available {} SP   Bugs {} SP",
            metrics.total_capacity, metrics.total_available_capacity, metrics.total_bug_points
        ),
        Style::default().fg(TEXT_MUTED),
    ));
    frame.render_widget(breakdown, rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_percent_zero_max() {
        assert_eq!(scale_percent(50, 0), 0);
    }

    #[test]
    fn test_scale_percent_scales_against_max() {
        assert_eq!(scale_percent(0, 200), 0);
        assert_eq!(scale_percent(50, 200), 25);
        assert_eq!(scale_percent(200, 200), 100);
    }

    #[test]
    fn test_scale_percent_clamps_over_max() {
        assert_eq!(scale_percent(300, 200), 100);
    }
}
