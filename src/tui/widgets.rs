//! Shared picker widget helpers

use crate::style::Theme;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated text
const ELLIPSIS: char = '…';

/// Truncate `text` to `max_width` terminal columns, ending in `…` when cut
///
/// Double-width glyphs count as two columns. A wide glyph that would straddle
/// the limit is dropped, so the result can be one column short.
pub(crate) fn truncate(text: &str, max_width: u16) -> String {
    let max = usize::from(max_width);
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Build the help bar, `key desc • key desc`
pub(crate) fn help_line(items: &[(&'static str, &'static str)], theme: Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("    ", theme.base())];
    for (i, (key, desc)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", theme.help_separator()));
        }
        spans.push(Span::styled(*key, theme.help_key()));
        spans.push(Span::styled(" ", theme.base()));
        spans.push(Span::styled(*desc, theme.help_desc()));
    }
    Line::from(spans)
}

/// Build the page indicator, one dot per page with the current one active
pub(crate) fn paginator_line(page: usize, page_count: usize, theme: Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("    ", theme.base())];
    for i in 0..page_count {
        spans.push(Span::styled("•", theme.dot(i == page)));
    }
    Line::from(spans)
}
