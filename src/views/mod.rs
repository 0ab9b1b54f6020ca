//! Text renderers for the two pages.
//!
//! Each view is a plain function from page state to a `String`, built out
//! of the small components in this module (header, tag chips, prose).

mod card;
mod detail;
mod list;

pub use card::{render_card, CARD_WIDTH};
pub use detail::{render_detail, render_detail_page, render_loading};
pub use list::{render_grid, render_list_page, render_pagination};

/// Width of a rendered screen, three cards plus gutters.
pub const SCREEN_WIDTH: usize = CARD_WIDTH * 3 + GUTTER * 2;

/// Gap between cards in a grid row.
pub const GUTTER: usize = 3;

pub const TITLE: &str = "A Thousand Recipes";

/// Maximum number of tag chips shown for a recipe.
pub const MAX_TAGS: usize = 3;

/// Page title bar shared by both pages.
pub fn render_header() -> String {
    let rule = "=".repeat(SCREEN_WIDTH);
    format!("{}\n{}\n{}\n", rule, center(TITLE, SCREEN_WIDTH), rule)
}

/// Chips for the first [`MAX_TAGS`] tags, e.g. `[Pizza] [Italian]`.
pub fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .take(MAX_TAGS)
        .map(|tag| format!("[{}]", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join list items into a single line of prose.
pub fn join_prose(items: &[String]) -> String {
    items.join(", ")
}

pub(crate) fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Left-align `text` in a field of `width`, truncating if needed.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width - width_of(&text);
    format!("{}{}", text, " ".repeat(fill))
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let left = (width - width_of(&text)) / 2;
    format!("{}{}", " ".repeat(left), text)
}

/// Greedy word wrap. Words longer than `width` are truncated.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        if line.is_empty() {
            line = word;
        } else if width_of(&line) + 1 + width_of(&word) <= width {
            line.push(' ');
            line.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut line, word));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Keep at most `max` lines, ending the last kept line with an ellipsis
/// when something was dropped.
pub(crate) fn clamp_lines(mut lines: Vec<String>, max: usize, width: usize) -> Vec<String> {
    if lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            let kept = truncate(last, width.saturating_sub(1));
            *last = if kept.ends_with('…') {
                kept
            } else {
                format!("{}…", kept)
            };
        }
    }
    lines
}
