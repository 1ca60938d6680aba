//! Top-level dashboard layout

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::DashboardView;
use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_SECONDARY,
};

use super::cards::{render_metric_cards, render_summary_cards};
use super::chart::{render_capacity_section, render_velocity_section};
use super::developers::render_developer_cards;
use super::helpers::format_date_range;
use super::recommendations::render_recommendations;
use super::timeline::render_timeline;

/// Render one full frame of the dashboard
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(8),    // Active view
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_header(main_layout[0], app, frame);
    render_tabs(main_layout[1], app, frame);
    match app.view {
        DashboardView::Overview => render_overview(main_layout[2], app, frame),
        DashboardView::Developers => render_developer_cards(main_layout[2], app, frame),
        DashboardView::Timeline => render_timeline(main_layout[2], app, frame),
    }
    render_bottom_bar(main_layout[3], app, frame);
}

fn render_header(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Min(20)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.sprint.sprint_name),
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("velocity & capacity", Style::default().fg(TEXT_MUTED)),
    ]));
    frame.render_widget(title, columns[0]);

    let window = Paragraph::new(Span::styled(
        format!(
            "{}  ({} working days) ",
            format_date_range(app.sprint.start_date, app.sprint.end_date),
            app.sprint.total_working_days
        ),
        Style::default().fg(TEXT_SECONDARY),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(window, columns[1]);
}

fn render_tabs(area: Rect, app: &App, frame: &mut Frame) {
    let titles = DashboardView::ALL.map(|view| view.label());
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .style(Style::default().fg(TEXT_MUTED))
        .highlight_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

fn render_overview(area: Rect, app: &mut App, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Headline metric cards
            Constraint::Min(7),     // Velocity and capacity sections
            Constraint::Length(8),  // Insights
            Constraint::Length(5),  // Roster summary cards
        ])
        .split(area);

    render_metric_cards(rows[0], &app.metrics, frame);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_velocity_section(middle[0], &app.metrics, frame);
    render_capacity_section(middle[1], &app.metrics, frame);

    render_recommendations(rows[2], &app.recommendations, frame);
    render_summary_cards(rows[3], &app.sprint, &app.metrics, frame);
}

fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match app.view {
        DashboardView::Overview => " q: Quit | Tab/1-3: Views | r: Reload ",
        DashboardView::Developers => {
            " q: Quit | Tab/1-3: Views | Up/Down: Select | Enter: Details | s: Sort | r: Reload "
        }
        DashboardView::Timeline => " q: Quit | Tab/1-3: Views | Up/Down: Scroll | r: Reload ",
    };
    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(BG_PRIMARY).bg(CYAN_PRIMARY));
    frame.render_widget(keybindings, area);
}
