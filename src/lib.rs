//! Browse the dummyjson recipe catalogue: a paginated recipe list and a
//! recipe detail page, rendered as text.
//!
//! # Example
//! ```no_run
//! use recipe_browser::{Browser, BrowserConfig, RecipeClient, Route};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BrowserConfig::load()?;
//! let mut browser = Browser::new(RecipeClient::new(&config.api)?);
//! browser.navigate(Route::parse("/?page=2")?).await;
//! println!("{}", browser.render());
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod pagination;
pub mod route;
pub mod views;

pub use browser::{Browser, Command};
pub use client::{RecipeClient, RecipeSource};
pub use config::BrowserConfig;
pub use error::BrowseError;
pub use model::{Recipe, RecipePage};
pub use pages::{DetailPage, ListPage, LoadState};
pub use pagination::{Pagination, PAGE_SIZE};
pub use route::Route;

use pagination::offset;

/// Fetch one list page (1-based) from the configured API.
pub async fn fetch_page(page: u32) -> Result<RecipePage, BrowseError> {
    let config = BrowserConfig::load()?;
    let client = RecipeClient::new(&config.api)?;
    client.list(PAGE_SIZE, offset(page.max(1))).await
}

/// Fetch one recipe by id from the configured API.
pub async fn fetch_recipe(id: u32) -> Result<Recipe, BrowseError> {
    let config = BrowserConfig::load()?;
    let client = RecipeClient::new(&config.api)?;
    client.get(id).await
}
