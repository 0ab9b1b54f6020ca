use crate::client::RecipeSource;
use crate::error::BrowseError;
use crate::model::{Recipe, RecipePage};
use crate::pages::{LoadState, Resource, Ticket};
use crate::pagination::{offset, Pagination, PAGE_SIZE};

/// The paginated recipe grid.
///
/// The page number is the only dependency: changing it starts a new fetch
/// of [`PAGE_SIZE`] recipes at the matching offset.
#[derive(Debug, Default)]
pub struct ListPage {
    resource: Resource<u32, RecipePage>,
}

impl ListPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current 1-based page number.
    pub fn page(&self) -> u32 {
        self.resource.key().copied().unwrap_or(1)
    }

    /// Point the page at `page`. Returns a ticket when that changes the
    /// page number, `None` when the page is already showing it.
    pub fn visit(&mut self, page: u32) -> Option<Ticket<u32>> {
        let page = page.max(1);
        if self.resource.is_current(&page) {
            None
        } else {
            Some(self.resource.begin(page))
        }
    }

    /// Show `page` after the page was away, fetching even if the page
    /// number is unchanged.
    pub fn mount(&mut self, page: u32) -> Ticket<u32> {
        self.resource.begin(page.max(1))
    }

    /// Start a fresh fetch of the current page.
    pub fn reload(&mut self) -> Ticket<u32> {
        self.mount(self.page())
    }

    /// Run the request a ticket stands for.
    pub async fn fetch<S: RecipeSource + ?Sized>(
        source: &S,
        ticket: &Ticket<u32>,
    ) -> Result<RecipePage, BrowseError> {
        source.list(PAGE_SIZE, offset(*ticket.key())).await
    }

    /// Apply a fetch result; stale tickets are ignored.
    pub fn apply(&mut self, ticket: Ticket<u32>, result: Result<RecipePage, BrowseError>) -> bool {
        self.resource.resolve(ticket, result)
    }

    /// Visit `page` and wait for its data.
    pub async fn show<S: RecipeSource + ?Sized>(&mut self, source: &S, page: u32) {
        if let Some(ticket) = self.visit(page) {
            self.run(source, ticket).await;
        }
    }

    pub(crate) async fn run<S: RecipeSource + ?Sized>(&mut self, source: &S, ticket: Ticket<u32>) {
        let result = Self::fetch(source, &ticket).await;
        self.apply(ticket, result);
    }

    pub fn state(&self) -> &LoadState<RecipePage> {
        self.resource.state()
    }

    /// Recipes on the current page; empty until they arrive.
    pub fn recipes(&self) -> &[Recipe] {
        self.state()
            .loaded()
            .map(|page| page.recipes.as_slice())
            .unwrap_or(&[])
    }

    /// Total recipe count reported by the API, 0 until it arrives.
    pub fn total(&self) -> u32 {
        self.state().loaded().map(|page| page.total).unwrap_or(0)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page(), self.total())
    }

    /// Recipe on the card at 1-based `position`.
    pub fn card(&self, position: usize) -> Option<&Recipe> {
        position
            .checked_sub(1)
            .and_then(|index| self.recipes().get(index))
    }

    /// Failure message of the last fetch, if it failed.
    pub fn error(&self) -> Option<&str> {
        match self.state() {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
