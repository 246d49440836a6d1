use contacts_core::{HistoryMode, Location};
use contacts_logging::{contacts_debug, contacts_trace};

use crate::NavigationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    /// Back/forward to the entry at `index`.
    Pop { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub id: NavigationId,
    pub target: Location,
    pub kind: NavigationKind,
}

/// Browser-style history stack with a single pending-navigation slot.
///
/// Starting a navigation supersedes whatever is pending; only the pending
/// navigation can commit, so a slow, superseded load never lands.
#[derive(Debug, Clone)]
pub struct Navigator {
    entries: Vec<Location>,
    index: usize,
    pending: Option<PendingNavigation>,
    next_id: NavigationId,
}

impl Navigator {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            pending: None,
            next_id: 1,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    pub fn begin(&mut self, target: Location, mode: HistoryMode) -> NavigationId {
        let kind = match mode {
            HistoryMode::Push => NavigationKind::Push,
            HistoryMode::Replace => NavigationKind::Replace,
        };
        self.start(target, kind)
    }

    pub fn can_go_back(&self) -> bool {
        self.pop_base() > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.pop_base() + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<NavigationId> {
        let index = self.pop_base().checked_sub(1)?;
        Some(self.start(self.entries[index].clone(), NavigationKind::Pop { index }))
    }

    pub fn forward(&mut self) -> Option<NavigationId> {
        let index = self.pop_base() + 1;
        let target = self.entries.get(index)?.clone();
        Some(self.start(target, NavigationKind::Pop { index }))
    }

    /// Applies the navigation if `id` is still pending. Returns the new
    /// current location, or `None` for a superseded navigation.
    pub fn commit(&mut self, id: NavigationId) -> Option<Location> {
        if self.pending.as_ref().map(|p| p.id) != Some(id) {
            contacts_debug!("dropping superseded navigation {}", id);
            return None;
        }
        let pending = self.pending.take()?;
        match pending.kind {
            NavigationKind::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(pending.target);
                self.index = self.entries.len() - 1;
            }
            NavigationKind::Replace => {
                self.entries[self.index] = pending.target;
            }
            NavigationKind::Pop { index } => {
                // Entries cannot shrink while a pop is pending.
                self.index = index.min(self.entries.len() - 1);
            }
        }
        contacts_trace!(
            "committed navigation {} -> {} ({} entries)",
            id,
            self.current(),
            self.entries.len()
        );
        Some(self.current().clone())
    }

    /// Drops the pending navigation if it is `id`.
    pub fn abandon(&mut self, id: NavigationId) -> bool {
        if self.pending.as_ref().map(|p| p.id) == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    fn start(&mut self, target: Location, kind: NavigationKind) -> NavigationId {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(previous) = &self.pending {
            contacts_debug!("navigation {} supersedes {}", id, previous.id);
        }
        self.pending = Some(PendingNavigation { id, target, kind });
        id
    }

    // Consecutive back/forward presses move relative to the pending pop.
    fn pop_base(&self) -> usize {
        match &self.pending {
            Some(PendingNavigation {
                kind: NavigationKind::Pop { index },
                ..
            }) => *index,
            _ => self.index,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
