use log::debug;
use std::fmt::Debug;

use crate::error::BrowseError;

/// Where a page's data currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// A fetch is in flight, or none has been started yet
    Loading,
    Loaded(T),
    /// The last fetch failed; holds the message shown to the user
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Identifies one fetch started by a [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

impl<K> Ticket<K> {
    /// The dependency value the fetch was started for.
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Data loaded for a dependency key (a page number, a recipe id).
///
/// Every call to [`Resource::begin`] supersedes the tickets handed out
/// before it; results carrying a superseded ticket are dropped, so a slow
/// response can never overwrite the data of a newer request.
#[derive(Debug)]
pub struct Resource<K, T> {
    key: Option<K>,
    generation: u64,
    state: LoadState<T>,
}

impl<K, T> Default for Resource<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: LoadState::Loading,
        }
    }
}

impl<K: Clone + PartialEq + Debug, T> Resource<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Whether the resource already tracks `key`.
    pub fn is_current(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Start a fetch for `key`, clearing whatever was loaded before.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.state = LoadState::Loading;
        Ticket {
            key,
            generation: self.generation,
        }
    }

    /// Store the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` when the ticket was superseded and the result dropped.
    pub fn resolve(&mut self, ticket: Ticket<K>, result: Result<T, BrowseError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale response for {:?} (generation {} < {})",
                ticket.key, ticket.generation, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let resource: Resource<u32, &str> = Resource::new();
        assert!(resource.state().is_loading());
        assert_eq!(resource.key(), None);
    }

    #[test]
    fn test_resolve_current_ticket() {
        let mut resource = Resource::new();
        let ticket = resource.begin(1u32);
        assert!(resource.resolve(ticket, Ok("one")));
        assert_eq!(resource.state().loaded(), Some(&"one"));
        assert!(resource.is_current(&1));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut resource = Resource::new();
        let first = resource.begin(1u32);
        let second = resource.begin(2u32);

        // The newer request finishes first, then the old one straggles in.
        assert!(resource.resolve(second, Ok("two")));
        assert!(!resource.resolve(first, Ok("one")));

        assert_eq!(resource.state().loaded(), Some(&"two"));
        assert_eq!(resource.key(), Some(&2));
    }

    #[test]
    fn test_reload_of_same_key_supersedes() {
        let mut resource = Resource::new();
        let first = resource.begin(3u32);
        let again = resource.begin(3u32);

        assert!(!resource.resolve(first, Ok("old")));
        assert!(resource.state().is_loading());
        assert!(resource.resolve(again, Ok("new")));
        assert_eq!(resource.state().loaded(), Some(&"new"));
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut resource: Resource<u32, &str> = Resource::new();
        let ticket = resource.begin(5);
        resource.resolve(ticket, Err(BrowseError::InvalidRoute("/nope".to_string())));

        assert_eq!(
            resource.state(),
            &LoadState::Failed("Invalid route: /nope".to_string())
        );
    }
}
