// Roster domain module
// The candidate player pool for a contest, loaded from the roster provider

use serde::{Deserialize, Serialize};

use crate::domain::draft::{ContestId, PlayerId, Role, RosterFilter, Sport};

/// A selectable player as delivered by the roster provider
///
/// Immutable once loaded; identity is the opaque `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub role: Role,
}

/// Contest metadata returned alongside the player pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    pub title: String,
    pub sport: Sport,
}

/// The full player pool for a contest, in provider order
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Returns all players in provider order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks a player up by identifier
    pub fn find(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// True when the identifier belongs to this roster
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.find(id).is_some()
    }

    /// Pure projection of the pool through a role filter
    ///
    /// `RosterFilter::All` yields the whole pool; a role filter yields
    /// the matching subsequence in original order. Never mutates
    /// anything and is idempotent.
    pub fn filter_by_role(&self, filter: RosterFilter) -> Vec<&Player> {
        match filter {
            RosterFilter::All => self.players.iter().collect(),
            RosterFilter::Role(role) => {
                self.players.iter().filter(|p| p.role == role).collect()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
