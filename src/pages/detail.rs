use crate::client::RecipeSource;
use crate::error::BrowseError;
use crate::model::Recipe;
use crate::pages::{LoadState, Resource, Ticket};

/// A single recipe, keyed by the id from the URL path.
#[derive(Debug, Default)]
pub struct DetailPage {
    resource: Resource<u32, Recipe>,
}

impl DetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the recipe being shown, once one was visited.
    pub fn id(&self) -> Option<u32> {
        self.resource.key().copied()
    }

    /// Point the page at recipe `id`. Returns a ticket when the id changed.
    pub fn visit(&mut self, id: u32) -> Option<Ticket<u32>> {
        if self.resource.is_current(&id) {
            None
        } else {
            Some(self.resource.begin(id))
        }
    }

    /// Show recipe `id` after the page was away, fetching even if the id
    /// is unchanged.
    pub fn mount(&mut self, id: u32) -> Ticket<u32> {
        self.resource.begin(id)
    }

    /// Start a fresh fetch of the current recipe, if any.
    pub fn reload(&mut self) -> Option<Ticket<u32>> {
        self.id().map(|id| self.mount(id))
    }

    pub async fn fetch<S: RecipeSource + ?Sized>(
        source: &S,
        ticket: &Ticket<u32>,
    ) -> Result<Recipe, BrowseError> {
        source.get(*ticket.key()).await
    }

    /// Apply a fetch result; stale tickets are ignored.
    pub fn apply(&mut self, ticket: Ticket<u32>, result: Result<Recipe, BrowseError>) -> bool {
        self.resource.resolve(ticket, result)
    }

    /// Visit recipe `id` and wait for its data.
    pub async fn show<S: RecipeSource + ?Sized>(&mut self, source: &S, id: u32) {
        if let Some(ticket) = self.visit(id) {
            self.run(source, ticket).await;
        }
    }

    pub(crate) async fn run<S: RecipeSource + ?Sized>(&mut self, source: &S, ticket: Ticket<u32>) {
        let result = Self::fetch(source, &ticket).await;
        self.apply(ticket, result);
    }

    pub fn state(&self) -> &LoadState<Recipe> {
        self.resource.state()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.state().loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::recipe;
    use crate::pages::tests::FakeSource;

    #[test]
    fn test_loading_until_response() {
        let mut page = DetailPage::new();
        let _ticket = page.visit(3).unwrap();

        assert!(page.state().is_loading());
        assert_eq!(page.recipe(), None);
        assert_eq!(page.id(), Some(3));
    }

    #[tokio::test]
    async fn test_show_fetches_by_id() {
        let source = FakeSource::with_recipes(10);
        let mut page = DetailPage::new();

        page.show(&source, 4).await;

        assert_eq!(source.get_calls(), vec![4]);
        assert_eq!(page.recipe().map(|r| r.id), Some(4));
    }

    #[tokio::test]
    async fn test_missing_recipe_fails_instead_of_loading_forever() {
        let source = FakeSource::with_recipes(2);
        let mut page = DetailPage::new();

        page.show(&source, 99).await;

        assert!(matches!(page.state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_stale_recipe_is_ignored() {
        let mut page = DetailPage::new();
        let first = page.visit(1).unwrap();
        let second = page.visit(2).unwrap();

        assert!(page.apply(second, Ok(recipe(2))));
        assert!(!page.apply(first, Ok(recipe(1))));
        assert_eq!(page.recipe().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_reload_without_visit() {
        let mut page = DetailPage::new();
        assert!(page.reload().is_none());
    }
}
