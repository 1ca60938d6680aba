//! Developer card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::{CapacityStatus, DeveloperRecord};
use crate::theme::{
    AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, RED_ERROR,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, get_pulse_color, status_color,
};

use super::helpers::{format_percent, format_short_date, truncate_end};

/// Height of a collapsed card: borders plus four content lines.
pub const CARD_HEIGHT: u16 = 6;
/// Extra lines the selected card gains when expanded.
pub const EXPANDED_EXTRA: u16 = 5;

/// Move the scroll offset just far enough that the selected card is
/// fully visible. Cards have uneven heights because the selected one
/// may be expanded.
fn first_visible_for_selection(
    mut scroll: usize,
    selected: usize,
    viewport: u16,
    heights: &[u16],
) -> usize {
    if selected < scroll {
        return selected;
    }
    while scroll < selected {
        let mut y = 0u16;
        let mut selected_fits = false;
        for (pos, &h) in heights.iter().enumerate().skip(scroll) {
            if pos > selected {
                break;
            }
            if y + h <= viewport {
                if pos == selected {
                    selected_fits = true;
                }
                y += h;
            } else {
                break;
            }
        }
        if selected_fits {
            break;
        }
        scroll += 1;
    }
    scroll
}

/// Render the scrollable stack of developer cards
pub fn render_developer_cards(area: Rect, app: &mut App, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let order = app.developer_order();
    let header = Paragraph::new(Span::styled(
        format!(
            " {} developers  |  sort: {}  |  Enter for details",
            order.len(),
            app.dev_sort.label()
        ),
        Style::default().fg(TEXT_MUTED),
    ));
    frame.render_widget(header, rows[0]);

    let cards_area = rows[1];
    if order.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No developers in this sprint",
            Style::default().fg(TEXT_MUTED),
        ));
        frame.render_widget(empty, cards_area);
        return;
    }

    let heights: Vec<u16> = (0..order.len())
        .map(|pos| {
            if pos == app.selected_dev && app.dev_expanded {
                CARD_HEIGHT + EXPANDED_EXTRA
            } else {
                CARD_HEIGHT
            }
        })
        .collect();

    app.dev_scroll = first_visible_for_selection(
        app.dev_scroll,
        app.selected_dev,
        cards_area.height,
        &heights,
    );

    let mut offset = 0u16;
    for pos in app.dev_scroll..order.len() {
        let h = heights[pos];
        if offset + h > cards_area.height {
            break;
        }
        let card_area = Rect::new(cards_area.x, cards_area.y + offset, cards_area.width, h);
        render_developer_card(
            card_area,
            &app.sprint.developers[order[pos]],
            pos == app.selected_dev,
            pos == app.selected_dev && app.dev_expanded,
            app.animation_tick,
            frame,
        );
        offset += h;
    }
}

/// Render a single developer card
///
/// Collapsed cards show name, utilization gauge, delivery numbers, and
/// leave flags. The expanded card appends the derived metrics.
fn render_developer_card(
    area: Rect,
    dev: &DeveloperRecord,
    selected: bool,
    expanded: bool,
    tick: u64,
    frame: &mut Frame,
) {
    let status = dev.status();
    let accent = status_color(status);
    // Overloaded developers pulse to stand out in a long roster
    let indicator_color = if status == CapacityStatus::Overloaded {
        get_pulse_color(tick, RED_ERROR, AMBER_WARNING)
    } else {
        accent
    };
    let border_color = if selected { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let bg_color = if selected { BG_TERTIARY } else { BG_SECONDARY };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let mut constraints = vec![
        Constraint::Length(1), // Title line
        Constraint::Length(1), // Utilization gauge
        Constraint::Length(1), // Delivery numbers
        Constraint::Length(1), // Leave and bug flags
    ];
    if expanded {
        constraints.push(Constraint::Length(1)); // Spacer
        constraints.extend([Constraint::Length(1); 4]); // Derived metrics
    }
    let inner_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Title line: indicator, name, status badge on the right
    let badge = format!(" {} ", status.label());
    let title_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(badge.chars().count() as u16),
        ])
        .split(inner_layout[0]);

    let name_width = title_layout[0].width.saturating_sub(3) as usize;
    let title_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(indicator_color)),
        Span::styled(
            truncate_end(&dev.name, name_width),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![title_line]), title_layout[0]);

    let badge_span = Span::styled(badge, Style::default().fg(BG_PRIMARY).bg(accent));
    frame.render_widget(Paragraph::new(Line::from(badge_span)), title_layout[1]);

    // Utilization gauge
    let utilization = dev.utilization();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(BG_SECONDARY))
        .percent(utilization.round().clamp(0.0, 100.0) as u16)
        .label(Span::styled(
            format_percent(utilization),
            Style::default().fg(TEXT_PRIMARY),
        ));
    frame.render_widget(gauge, inner_layout[1]);

    // Delivery numbers
    let numbers = format!(
        "{}/{} SP done   {}/{} SP capacity",
        dev.completed_story_points,
        dev.assigned_story_points,
        dev.available_capacity,
        dev.total_capacity
    );
    frame.render_widget(
        Paragraph::new(Span::styled(numbers, Style::default().fg(TEXT_SECONDARY))),
        inner_layout[2],
    );

    // Leave and bug flags
    let mut flags = Vec::new();
    match dev.leave_interval() {
        Some((start, end)) => flags.push(Span::styled(
            format!(
                "Leave {} to {}",
                format_short_date(start),
                format_short_date(end)
            ),
            Style::default().fg(AMBER_WARNING),
        )),
        None => flags.push(Span::styled("No leave", Style::default().fg(TEXT_MUTED))),
    }
    if dev.bug_points > 0 {
        flags.push(Span::styled(
            format!("   {} SP bugs", dev.bug_points),
            Style::default().fg(RED_ERROR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(flags)), inner_layout[3]);

    if expanded {
        let details = [
            (
                "Utilization",
                format!("{} of total capacity", format_percent(utilization)),
            ),
            (
                "Efficiency",
                format!("{} of assigned done", format_percent(dev.efficiency())),
            ),
            (
                "Bug share",
                format!("{} of completed", format_percent(dev.bug_share())),
            ),
            (
                "Effective",
                format!("{} SP after bug work", dev.effective_points()),
            ),
        ];
        for (row, (label, value)) in details.iter().enumerate() {
            let line = Line::from(vec![
                Span::styled(format!("{:<14}", label), Style::default().fg(TEXT_MUTED)),
                Span::styled(value.clone(), Style::default().fg(TEXT_PRIMARY)),
            ]);
            frame.render_widget(Paragraph::new(line), inner_layout[5 + row]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_earlier_selection() {
        let heights = vec![CARD_HEIGHT; 7];
        assert_eq!(first_visible_for_selection(3, 1, 18, &heights), 1);
    }

    #[test]
    fn test_scroll_stays_when_selection_fits() {
        // Three collapsed cards fit in 18 rows.
        let heights = vec![CARD_HEIGHT; 7];
        assert_eq!(first_visible_for_selection(0, 0, 18, &heights), 0);
        assert_eq!(first_visible_for_selection(0, 2, 18, &heights), 0);
    }

    #[test]
    fn test_scroll_advances_past_viewport() {
        let heights = vec![CARD_HEIGHT; 7];
        // Selecting the fourth card pushes the first out of view.
        assert_eq!(first_visible_for_selection(0, 3, 18, &heights), 1);
        assert_eq!(first_visible_for_selection(0, 6, 18, &heights), 4);
    }

    #[test]
    fn test_scroll_accounts_for_expanded_card() {
        let mut heights = vec![CARD_HEIGHT; 7];
        heights[2] = CARD_HEIGHT + EXPANDED_EXTRA;
        // 6 + 6 + 11 = 23 does not fit in 12 rows; the expanded card
        // ends up alone at the top.
        assert_eq!(first_visible_for_selection(0, 2, 12, &heights), 2);
        // With 18 rows the card fits alongside one collapsed card.
        assert_eq!(first_visible_for_selection(0, 2, 18, &heights), 1);
    }

    #[test]
    fn test_scroll_zero_viewport_terminates() {
        let heights = vec![CARD_HEIGHT; 3];
        assert_eq!(first_visible_for_selection(0, 2, 0, &heights), 2);
    }
}
