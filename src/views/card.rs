use crate::model::Recipe;
use crate::views::{clamp_lines, pad, tag_chips, truncate, width_of, wrap};

/// Outer width of a card, borders included.
pub const CARD_WIDTH: usize = 34;

const INNER_WIDTH: usize = CARD_WIDTH - 4;
const NAME_LINES: usize = 2;
const MAX_DIFFICULTY_WIDTH: usize = 12;

/// Render a recipe card as fixed-width lines.
///
/// Every card has the same height so cards can be laid side by side.
/// `position` is the 1-based label used to open the card.
pub fn render_card(recipe: &Recipe, position: usize) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(CARD_WIDTH - 2));
    let row = |text: &str| format!("| {} |", pad(text, INNER_WIDTH));

    let difficulty = truncate(&recipe.difficulty, MAX_DIFFICULTY_WIDTH);
    let name_width = if difficulty.is_empty() {
        INNER_WIDTH
    } else {
        INNER_WIDTH - width_of(&difficulty) - 1
    };
    let mut name = clamp_lines(wrap(&recipe.name, name_width), NAME_LINES, name_width);
    name.resize(NAME_LINES, String::new());

    let mut lines = vec![
        border.clone(),
        row(&format!("#{}", position)),
        row(&format!("img: {}", recipe.image)),
    ];
    for (i, line) in name.iter().enumerate() {
        if i == 0 && !difficulty.is_empty() {
            lines.push(row(&format!("{} {}", pad(line, name_width), difficulty)));
        } else {
            lines.push(row(line));
        }
    }
    lines.push(row(&tag_chips(&recipe.tags)));
    lines.push(border);
    lines
}
