//! Picker rendering
//!
//! [`picker_lines`] turns selector state into text. [`render`] only paints
//! that text, so every frame is re-derived from state with no diffing.

use crate::selector::{Selector, SelectorState};
use crate::style::Theme;
use crate::tui::widgets::{help_line, paginator_line, truncate};
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Title shown above the list
pub(crate) const TITLE: &str = "Select an audio sink";

/// Text shown in place of an empty list
pub(crate) const EMPTY_TEXT: &str = "No sinks.";

/// Key hints for the help bar
const HELP_ITEMS: &[(&str, &str)] = &[
    ("↑/k", "up"),
    ("↓/j", "down"),
    ("enter", "select"),
    ("q", "quit"),
];

/// Build every line of the picker for a viewport `width` columns wide
pub(crate) fn picker_lines(selector: &Selector, theme: Theme, width: u16) -> Vec<Line<'static>> {
    match selector.state() {
        SelectorState::Browsing => browsing_lines(selector, theme, width),
        SelectorState::Confirmed(_) | SelectorState::Cancelled => {
            let message = selector.outcome_message().unwrap_or_default();
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("    ", theme.base()),
                    Span::styled(message, theme.message()),
                ]),
                Line::from(""),
            ]
        }
    }
}

fn browsing_lines(selector: &Selector, theme: Theme, width: u16) -> Vec<Line<'static>> {
    let item_width = selector.item_width(width);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", theme.base()),
            Span::styled(TITLE, theme.title()),
        ]),
        Line::from(""),
    ];

    let sinks = selector.sinks();
    if sinks.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&format!("    {EMPTY_TEXT}"), item_width),
            theme.item(),
        )));
    }

    for index in selector.visible_range() {
        let text = format!("{}. {}", index + 1, sinks[index].display_name);
        let line = if index == selector.cursor() {
            Span::styled(truncate(&format!("  > {text}"), item_width), theme.selected_item())
        } else {
            Span::styled(truncate(&format!("    {text}"), item_width), theme.item())
        };
        lines.push(Line::from(line));
    }

    // Keep the help bar in place on a short last page
    let shown = selector.visible_range().len().max(usize::from(sinks.is_empty()));
    for _ in shown..selector.config().visible_rows {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    if selector.page_count() > 1 {
        lines.push(paginator_line(selector.page(), selector.page_count(), theme));
        lines.push(Line::from(""));
    }
    lines.push(help_line(HELP_ITEMS, theme));
    lines
}

/// Paint the picker into the whole frame
pub(crate) fn render(frame: &mut Frame, selector: &Selector, theme: Theme) {
    let area = frame.area();
    let lines = picker_lines(selector, theme, area.width);
    frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
}
