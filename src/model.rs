use serde::Deserialize;

/// A recipe record as served by the remote API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub cook_time_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub calories_per_serving: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub user_id: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub meal_type: Vec<String>,
}

impl Recipe {
    /// Preparation plus cooking time, in minutes.
    pub fn total_time_minutes(&self) -> u64 {
        u64::from(self.prep_time_minutes) + u64::from(self.cook_time_minutes)
    }
}

/// One page of the recipe collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub total: u32,
    pub skip: u64,
    pub limit: u32,
}
