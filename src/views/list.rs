use crate::model::Recipe;
use crate::pages::ListPage;
use crate::pagination::{Pagination, ROW_SIZE};
use crate::views::{center, render_card, render_header, GUTTER, SCREEN_WIDTH};

/// Lay out cards in rows of three. Renders nothing for an empty slice.
pub fn render_grid(recipes: &[Recipe]) -> String {
    let gutter = " ".repeat(GUTTER);
    let mut out = String::new();

    for (row_index, row) in recipes.chunks(ROW_SIZE).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<String>> = row
            .iter()
            .enumerate()
            .map(|(i, recipe)| render_card(recipe, row_index * ROW_SIZE + i + 1))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let joined = cards
                .iter()
                .map(|card| card[line].as_str())
                .collect::<Vec<_>>()
                .join(&gutter);
            out.push_str(&joined);
            out.push('\n');
        }
    }
    out
}

/// Previous/next controls around the page-number links. The current page
/// is bracketed; a disabled control loses its arrow.
pub fn render_pagination(pagination: &Pagination) -> String {
    let previous = if pagination.has_previous() {
        "< Prev"
    } else {
        "  Prev"
    };
    let next = if pagination.has_next() {
        "Next >"
    } else {
        "Next  "
    };

    let mut controls = vec![previous.to_string()];
    controls.extend(pagination.links().map(|page| {
        if pagination.is_current(page) {
            format!("[{}]", page)
        } else {
            page.to_string()
        }
    }));
    controls.push(next.to_string());

    center(&controls.join("  "), SCREEN_WIDTH)
}

/// The whole list page: header, grid and pagination bar.
pub fn render_list_page(page: &ListPage) -> String {
    let mut out = render_header();
    out.push('\n');

    if let Some(message) = page.error() {
        out.push_str(&format!("! Could not load recipes: {}\n\n", message));
    }

    out.push_str(&render_grid(page.recipes()));
    out.push('\n');
    out.push_str(&render_pagination(&page.pagination()));
    out.push('\n');
    out
}
