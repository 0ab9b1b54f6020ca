mod detail;
mod list;
mod resource;

pub use detail::DetailPage;
pub use list::ListPage;
pub use resource::{LoadState, Resource, Ticket};

#[cfg(test)]
pub(crate) mod tests {
    use crate::client::RecipeSource;
    use crate::error::BrowseError;
    use crate::model::{fixtures::recipe, Recipe, RecipePage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory recipe source that records every request it receives.
    pub struct FakeSource {
        recipes: Vec<Recipe>,
        fail: bool,
        list_calls: Mutex<Vec<(u32, u64)>>,
        get_calls: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        pub fn with_recipes(count: u32) -> Self {
            Self {
                recipes: (1..=count).map(recipe).collect(),
                fail: false,
                list_calls: Mutex::new(Vec::new()),
                get_calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::with_recipes(0)
            }
        }

        pub fn list_calls(&self) -> Vec<(u32, u64)> {
            self.list_calls.lock().unwrap().clone()
        }

        pub fn get_calls(&self) -> Vec<u32> {
            self.get_calls.lock().unwrap().clone()
        }

        fn unavailable() -> BrowseError {
            BrowseError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn list(&self, limit: u32, skip: u64) -> Result<RecipePage, BrowseError> {
            self.list_calls.lock().unwrap().push((limit, skip));
            if self.fail {
                return Err(Self::unavailable());
            }

            let recipes = self
                .recipes
                .iter()
                .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                .take(limit as usize)
                .cloned()
                .collect();
            Ok(RecipePage {
                recipes,
                total: self.recipes.len() as u32,
                skip,
                limit,
            })
        }

        async fn get(&self, id: u32) -> Result<Recipe, BrowseError> {
            self.get_calls.lock().unwrap().push(id);
            if self.fail {
                return Err(Self::unavailable());
            }

            self.recipes
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| BrowseError::InvalidRoute(format!("/recipe/{}", id)))
        }
    }
}
