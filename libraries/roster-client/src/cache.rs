//! Client-side copy of the user list.
//!
//! The cache mirrors the server's store between fetches. Mutation responses
//! are applied in place so the list view updates without a refetch.
//!
//! Responses can resolve out of order. Every request takes a [`Ticket`]
//! before it is sent, and the cache remembers the newest ticket applied to
//! each record. A response carrying an older ticket than one already applied
//! to the same record is discarded. A list fetch that resolves after newer
//! mutations is merged with them rather than dropped.

use roster_core::{User, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache shared between the UI controllers.
pub type SharedCache = Arc<RwLock<UserCache>>;

/// Wrap a cache for sharing.
pub fn shared(cache: UserCache) -> SharedCache {
    Arc::new(RwLock::new(cache))
}

/// Request sequence number, issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct UserCache {
    users: Vec<User>,
    next_ticket: u64,
    applied: HashMap<UserId, Ticket>,
    latest_snapshot: Option<Ticket>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch.
    pub fn set_all(&mut self, users: Vec<User>) {
        self.users = users;
        self.applied.clear();
    }

    /// Append a newly created record.
    ///
    /// A record whose id is already cached is replaced in place instead, so
    /// ids stay unique.
    pub fn add(&mut self, user: User) {
        if !self.replace_one(user.clone()) {
            self.users.push(user);
        }
    }

    /// Swap the record with the same id. Returns `false` when none matched.
    pub fn replace_one(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    /// Drop the record with the given id, returning it.
    pub fn remove_one(&mut self, id: &UserId) -> Option<User> {
        let index = self.users.iter().position(|u| &u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Take the next request sequence number.
    pub fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Record that a mutation response for `id` is about to be applied.
    ///
    /// Returns `false`, recording nothing, when a response issued later has
    /// already been applied to the same record.
    pub fn accept(&mut self, id: &UserId, ticket: Ticket) -> bool {
        if self.applied.get(id).is_some_and(|seen| *seen > ticket) {
            return false;
        }
        self.applied.insert(id.clone(), ticket);
        true
    }

    /// Replace the list with a fetch issued under `ticket`.
    ///
    /// Records changed by mutations issued after the fetch keep their cached
    /// state: updated and created records are carried over, removed ones stay
    /// removed. Returns `false`, changing nothing, when a fetch issued later
    /// has already been applied.
    pub fn apply_snapshot(&mut self, ticket: Ticket, users: Vec<User>) -> bool {
        if self.latest_snapshot.is_some_and(|latest| latest > ticket) {
            return false;
        }

        let mut newer: Vec<(Ticket, UserId, Option<User>)> = self
            .applied
            .iter()
            .filter(|(_, seen)| **seen > ticket)
            .map(|(id, seen)| (*seen, id.clone(), self.get(id).cloned()))
            .collect();
        newer.sort_by_key(|(seen, _, _)| *seen);

        self.users = users;
        self.applied.retain(|_, seen| *seen > ticket);
        self.latest_snapshot = Some(ticket);

        for (_, id, record) in newer {
            match record {
                Some(user) => self.add(user),
                None => {
                    self.remove_one(&id);
                }
            }
        }
        true
    }
}
