use crate::model::Recipe;
use crate::pages::{DetailPage, LoadState};
use crate::views::{center, join_prose, render_header, tag_chips, wrap, SCREEN_WIDTH};

const SCREEN_HEIGHT: usize = 20;

/// Full-screen placeholder shown while a recipe is on its way.
pub fn render_loading() -> String {
    render_message("Loading...")
}

fn render_message(message: &str) -> String {
    let mut out = render_header();
    let padding = "\n".repeat(SCREEN_HEIGHT / 2);
    out.push_str(&padding);
    out.push_str(&center(message, SCREEN_WIDTH));
    out.push('\n');
    out.push_str(&padding);
    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn paragraph(out: &mut String, text: &str, indent: &str) {
    let width = SCREEN_WIDTH - indent.len();
    for line in wrap(text, width) {
        out.push_str(indent);
        out.push_str(&line);
        out.push('\n');
    }
}

/// Render every field of a loaded recipe.
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = render_header();
    out.push('\n');

    out.push_str(&format!("img: {}\n\n", recipe.image));
    out.push_str(&format!("{}  <{}>\n\n", recipe.name, recipe.difficulty));
    out.push_str(&format!(
        "Total cooking time {} min\n",
        recipe.total_time_minutes()
    ));
    out.push_str(&format!(
        "Prep time {} min    Cook time {} min\n",
        recipe.prep_time_minutes, recipe.cook_time_minutes
    ));
    let chips = tag_chips(&recipe.tags);
    if !chips.is_empty() {
        out.push('\n');
        out.push_str(&chips);
        out.push('\n');
    }

    section(&mut out, "Ingredients");
    paragraph(&mut out, &join_prose(&recipe.ingredients), "");

    section(&mut out, "Recipe");
    for (index, step) in recipe.instructions.iter().enumerate() {
        let number = format!("{:>3}. ", index + 1);
        let hanging = " ".repeat(number.len());
        let lines = wrap(step, SCREEN_WIDTH - number.len());
        for (i, line) in lines.iter().enumerate() {
            out.push_str(if i == 0 { &number } else { &hanging });
            out.push_str(line);
            out.push('\n');
        }
    }

    section(&mut out, "Details");
    out.push_str(&format!("Cuisine: {}\n", recipe.cuisine));
    out.push_str(&format!("Meal type: {}\n", join_prose(&recipe.meal_type)));
    out.push_str(&format!("Calories: {}kcal\n", recipe.calories_per_serving));
    out.push_str(&format!("Rating: {} ★\n", recipe.rating));
    out
}

/// The detail page in whatever state it is in.
pub fn render_detail_page(page: &DetailPage) -> String {
    match page.state() {
        LoadState::Loading => render_loading(),
        LoadState::Loaded(recipe) => render_detail(recipe),
        LoadState::Failed(message) => {
            render_message(&format!("Could not load recipe: {}", message))
        }
    }
}
