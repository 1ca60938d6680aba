//! UI helper functions

use chrono::NaiveDate;

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shorten a string to fit a column, adding an ellipsis when it is cut.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Short "May 07" label for cards and the timeline.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Header-style range, "May 07 to Jun 10, 2024".
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} to {}", start.format("%b %d"), end.format("%b %d, %Y"))
}

/// Percentage rounded to a whole number, the way the cards show it.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}
