//! Interactive session over the two pages.
//!
//! Navigation is split in two steps so a caller can draw the loading
//! state in between: [`Browser::apply`] updates the route and starts the
//! fetch the new route depends on, [`Browser::complete`] waits for it.

mod command;

pub use command::{Command, HELP};

use log::debug;
use std::mem;

use crate::client::RecipeSource;
use crate::pages::{DetailPage, ListPage, Ticket};
use crate::route::Route;
use crate::views::{render_detail_page, render_list_page};

/// A fetch started by a navigation and not yet awaited.
#[derive(Debug)]
pub enum Pending {
    List(Ticket<u32>),
    Detail(Ticket<u32>),
}

pub struct Browser<S> {
    source: S,
    route: Route,
    mounted: bool,
    history: Vec<Route>,
    list: ListPage,
    detail: DetailPage,
    notice: Option<String>,
}

impl<S: RecipeSource> Browser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            route: Route::default(),
            mounted: false,
            history: Vec::new(),
            list: ListPage::new(),
            detail: DetailPage::new(),
            notice: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn list(&self) -> &ListPage {
        &self.list
    }

    pub fn detail(&self) -> &DetailPage {
        &self.detail
    }

    /// Message left by the last command that could not be carried out.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move to `route`, remembering the current one for [`Command::Back`].
    pub fn go(&mut self, route: Route) -> Option<Pending> {
        if self.mounted && route == self.route {
            return None;
        }
        if self.mounted {
            self.history.push(self.route);
        }
        self.enter(route)
    }

    fn enter(&mut self, route: Route) -> Option<Pending> {
        let remount = !self.mounted || mem::discriminant(&route) != mem::discriminant(&self.route);
        debug!("Entering {} (remount: {})", route, remount);
        self.route = route;
        self.mounted = true;

        match route {
            Route::List { page } if remount => Some(Pending::List(self.list.mount(page))),
            Route::List { page } => self.list.visit(page).map(Pending::List),
            Route::Detail { id } if remount => Some(Pending::Detail(self.detail.mount(id))),
            Route::Detail { id } => self.detail.visit(id).map(Pending::Detail),
        }
    }

    /// Carry out the routing part of a command.
    ///
    /// Help and Quit belong to the caller and leave the browser unchanged.
    pub fn apply(&mut self, command: &Command) -> Option<Pending> {
        self.notice = None;

        match command {
            Command::Next | Command::Previous => {
                if !matches!(self.route, Route::List { .. }) {
                    return self.notify("Paging is only available on the recipe list");
                }
                let pagination = self.list.pagination();
                let target = if *command == Command::Next {
                    pagination.next()
                } else {
                    pagination.previous()
                };
                match target {
                    Some(page) => self.go(Route::list(page)),
                    None if *command == Command::Next => self.notify("Already on the last page"),
                    None => self.notify("Already on the first page"),
                }
            }
            Command::Page(page) => self.go(Route::list(*page)),
            Command::Open(position) => {
                if !matches!(self.route, Route::List { .. }) {
                    return self.notify("Cards can only be opened from the recipe list");
                }
                match self.list.card(*position).map(|recipe| recipe.id) {
                    Some(id) => self.go(Route::detail(id)),
                    None => self.notify(&format!("There is no card #{} on this page", position)),
                }
            }
            Command::Go(route) => self.go(*route),
            Command::Back => match self.history.pop() {
                Some(route) => self.enter(route),
                None => self.notify("Nothing to go back to"),
            },
            Command::Reload => match self.route {
                Route::List { .. } => Some(Pending::List(self.list.reload())),
                Route::Detail { .. } => self.detail.reload().map(Pending::Detail),
            },
            Command::Help | Command::Quit => None,
        }
    }

    fn notify(&mut self, message: &str) -> Option<Pending> {
        self.notice = Some(message.to_string());
        None
    }

    /// Wait for a fetch started by [`Browser::go`] or [`Browser::apply`].
    pub async fn complete(&mut self, pending: Pending) {
        match pending {
            Pending::List(ticket) => self.list.run(&self.source, ticket).await,
            Pending::Detail(ticket) => self.detail.run(&self.source, ticket).await,
        }
    }

    /// Navigate to `route` and wait for its data.
    pub async fn navigate(&mut self, route: Route) {
        if let Some(pending) = self.go(route) {
            self.complete(pending).await;
        }
    }

    /// Run a command to completion.
    pub async fn execute(&mut self, command: &Command) {
        if let Some(pending) = self.apply(command) {
            self.complete(pending).await;
        }
    }

    /// Draw the active page followed by the address line.
    pub fn render(&self) -> String {
        let mut out = match self.route {
            Route::List { .. } => render_list_page(&self.list),
            Route::Detail { .. } => render_detail_page(&self.detail),
        };
        out.push_str(&format!("\nURL: {}\n", self.route));
        if let Some(notice) = &self.notice {
            out.push_str(&format!("{}\n", notice));
        }
        out
    }
}
