//! Optimistic list cache.
//!
//! Cached lists are addressed by [`QueryKey`]. Every entry carries a
//! generation counter: a fetch records the generation when it starts and a
//! response is only stored if the generation is unchanged when it lands.
//! Mutations bump the generation, so a fetch that was already in flight when
//! an optimistic patch was applied cannot overwrite the patched rows.
//!
//! Mutation patches follow the write shape: a create inserts a placeholder
//! row, an update edits the matching row in place, a delete applies no
//! optimistic change and relies on invalidation alone.

use std::collections::HashMap;

use crate::client::keys::QueryKey;

#[derive(Debug, Clone)]
struct Entry<T> {
    rows: Vec<T>,
    generation: u64,
    /// Set on invalidation; the rows stay readable until the refetch lands.
    stale: bool,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            generation: 0,
            stale: true,
        }
    }
}

/// Ticket handed out by [`ListCache::begin_fetch`]; redeeming it stores the
/// response only if no mutation intervened.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct ListCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
}

impl<T: Clone> ListCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Cached rows for the key, if any fetch or patch ever populated it.
    pub fn get(&self, key: &QueryKey) -> Option<&[T]> {
        self.entries.get(key).map(|entry| entry.rows.as_slice())
    }

    /// True when the key has never been fetched or was invalidated since the
    /// last stored response.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_none_or(|entry| entry.stale)
    }

    /// Marks the start of a fetch and returns the ticket that the response
    /// must redeem.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> FetchTicket {
        let entry = self.entries.entry(key.clone()).or_default();
        FetchTicket {
            key: key.clone(),
            generation: entry.generation,
        }
    }

    /// Stores a fetched page unless a mutation bumped the generation while
    /// the request was in flight. Returns whether the rows were accepted.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, rows: Vec<T>) -> bool {
        match self.entries.get_mut(&ticket.key) {
            Some(entry) if entry.generation == ticket.generation => {
                entry.rows = rows;
                entry.stale = false;
                true
            }
            _ => false,
        }
    }

    /// Marks the key for refetch and defeats in-flight fetch tickets. The
    /// cached rows are kept so readers are not left staring at an empty list.
    pub fn invalidate(&mut self, key: &QueryKey) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.stale = true;
    }

    fn rows_mut(&mut self, key: &QueryKey) -> &mut Vec<T> {
        &mut self.entries.entry(key.clone()).or_default().rows
    }
}

/// Lifecycle of an optimistic mutation against one cached list.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<T> {
    Idle,
    /// Patch applied; holds the rows as they were before the patch.
    Optimistic { snapshot: Vec<T> },
    Committed,
    RolledBack,
}

/// Applies a local patch to a cached list before the server confirms it, and
/// can restore the exact pre-mutation rows if the write fails.
#[derive(Debug)]
pub struct OptimisticMutation<T> {
    key: QueryKey,
    state: MutationState<T>,
}

impl<T: Clone> OptimisticMutation<T> {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            state: MutationState::Idle,
        }
    }

    pub fn state(&self) -> &MutationState<T> {
        &self.state
    }

    /// Snapshots the cached rows, bumps the generation so in-flight fetches
    /// cannot overwrite the patch, then applies the patch. Returns false if
    /// the mutation already left the idle state.
    pub fn begin<F>(&mut self, cache: &mut ListCache<T>, patch: F) -> bool
    where
        F: FnOnce(&mut Vec<T>),
    {
        if !matches!(self.state, MutationState::Idle) {
            return false;
        }
        let snapshot = cache
            .get(&self.key)
            .map(<[T]>::to_vec)
            .unwrap_or_default();
        cache.invalidate(&self.key);
        patch(cache.rows_mut(&self.key));
        self.state = MutationState::Optimistic { snapshot };
        true
    }

    /// The server accepted the write: keep the patched rows and leave the
    /// key invalidated so the next read fetches the authoritative list.
    pub fn commit(&mut self, cache: &mut ListCache<T>) -> bool {
        if !matches!(self.state, MutationState::Optimistic { .. }) {
            return false;
        }
        cache.invalidate(&self.key);
        self.state = MutationState::Committed;
        true
    }

    /// The write failed: restore the rows exactly as they were before the
    /// patch and schedule a refetch.
    pub fn rollback(&mut self, cache: &mut ListCache<T>) -> bool {
        let snapshot = match std::mem::replace(&mut self.state, MutationState::RolledBack) {
            MutationState::Optimistic { snapshot } => snapshot,
            other => {
                self.state = other;
                return false;
            }
        };
        *cache.rows_mut(&self.key) = snapshot;
        cache.invalidate(&self.key);
        true
    }
}
