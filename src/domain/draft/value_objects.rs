use serde::{Deserialize, Serialize};
use std::fmt;

/// How many players a finished fantasy team holds.
pub const TEAM_SIZE: usize = 11;

/// Opaque player identifier as issued by the roster provider
///
/// # Invariants
/// - Must not be empty
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new PlayerId
    ///
    /// # Returns
    /// * `Ok(PlayerId)` - If the identifier is non-empty
    /// * `Err(String)` - If the identifier is empty
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("Player identifier cannot be empty".to_string());
        }
        Ok(PlayerId(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque contest identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContestId(String);

impl ContestId {
    /// Creates a new ContestId
    ///
    /// # Returns
    /// * `Ok(ContestId)` - If the identifier is non-empty
    /// * `Err(String)` - If the identifier is empty
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("Contest identifier cannot be empty".to_string());
        }
        Ok(ContestId(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sport a contest is played in
///
/// Each sport carries its fixed role set; roles are never shared
/// across sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Cricket,
    Football,
}

impl Sport {
    /// Returns the fixed set of roles for this sport, in display order
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Sport::Cricket => &[
                Role::Batsman,
                Role::Bowler,
                Role::AllRounder,
                Role::WicketKeeper,
            ],
            Sport::Football => &[
                Role::Goalkeeper,
                Role::Defender,
                Role::Midfielder,
                Role::Forward,
            ],
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sport::Cricket => write!(f, "cricket"),
            Sport::Football => write!(f, "football"),
        }
    }
}

/// Player role within a sport
///
/// Wire names match the upstream roster feed ("All-Rounder",
/// "Wicket-Keeper" and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder")]
    AllRounder,
    #[serde(rename = "Wicket-Keeper")]
    WicketKeeper,
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    /// Returns the sport this role belongs to
    pub fn sport(&self) -> Sport {
        match self {
            Role::Batsman | Role::Bowler | Role::AllRounder | Role::WicketKeeper => Sport::Cricket,
            Role::Goalkeeper | Role::Defender | Role::Midfielder | Role::Forward => Sport::Football,
        }
    }

    /// Returns the wire name of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
            Role::WicketKeeper => "Wicket-Keeper",
            Role::Goalkeeper => "Goalkeeper",
            Role::Defender => "Defender",
            Role::Midfielder => "Midfielder",
            Role::Forward => "Forward",
        }
    }

    /// Parses a wire name into a Role
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Batsman" => Ok(Role::Batsman),
            "Bowler" => Ok(Role::Bowler),
            "All-Rounder" => Ok(Role::AllRounder),
            "Wicket-Keeper" => Ok(Role::WicketKeeper),
            "Goalkeeper" => Ok(Role::Goalkeeper),
            "Defender" => Ok(Role::Defender),
            "Midfielder" => Ok(Role::Midfielder),
            "Forward" => Ok(Role::Forward),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Roster view filter: a single role or the "all" sentinel
///
/// Purely view-state; filtering never touches the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFilter {
    All,
    Role(Role),
}

impl RosterFilter {
    /// Parses the filter from its query-string form ("all" or a role name)
    pub fn parse(s: &str) -> Result<Self, String> {
        if s == "all" {
            Ok(RosterFilter::All)
        } else {
            Role::parse(s).map(RosterFilter::Role)
        }
    }
}

impl Default for RosterFilter {
    fn default() -> Self {
        RosterFilter::All
    }
}

/// Lifecycle status of a draft, derived from its selection count
///
/// # Status Transitions
/// ```text
/// Empty -> Partial -> Full -> Submitted
///              ^--------'
/// ```
/// Removing a player from a full draft returns it to Partial;
/// Submitted is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// No players selected yet
    Empty,
    /// Between 1 and 10 players selected
    Partial,
    /// Exactly 11 players selected, not yet submitted
    Full,
    /// Accepted by the save endpoint; no further edits
    Submitted,
}

impl DraftStatus {
    /// Derives the status from a selection count and the submitted flag
    pub fn derive(selected: usize, submitted: bool) -> Self {
        if submitted {
            DraftStatus::Submitted
        } else if selected == 0 {
            DraftStatus::Empty
        } else if selected < TEAM_SIZE {
            DraftStatus::Partial
        } else {
            DraftStatus::Full
        }
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DraftStatus::Empty => write!(f, "empty"),
            DraftStatus::Partial => write!(f, "partial"),
            DraftStatus::Full => write!(f, "full"),
            DraftStatus::Submitted => write!(f, "submitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_rejects_empty() {
        assert!(PlayerId::new("").is_err());
        assert!(PlayerId::new("p1").is_ok());
    }

    #[test]
    fn contest_id_rejects_empty() {
        assert!(ContestId::new("").is_err());
        assert!(ContestId::new("match-42").is_ok());
    }

    #[test]
    fn cricket_roles() {
        let roles = Sport::Cricket.roles();
        assert_eq!(roles.len(), 4);
        assert!(roles.contains(&Role::WicketKeeper));
        assert!(roles.iter().all(|r| r.sport() == Sport::Cricket));
    }

    #[test]
    fn football_roles() {
        let roles = Sport::Football.roles();
        assert_eq!(roles.len(), 4);
        assert!(roles.contains(&Role::Goalkeeper));
        assert!(roles.iter().all(|r| r.sport() == Sport::Football));
    }

    #[test]
    fn role_wire_names_round_trip() {
        for sport in [Sport::Cricket, Sport::Football] {
            for role in sport.roles() {
                assert_eq!(Role::parse(role.as_str()), Ok(*role));
            }
        }
    }

    #[test]
    fn role_serde_uses_hyphenated_names() {
        let json = serde_json::to_string(&Role::AllRounder).unwrap();
        assert_eq!(json, "\"All-Rounder\"");
        let parsed: Role = serde_json::from_str("\"Wicket-Keeper\"").unwrap();
        assert_eq!(parsed, Role::WicketKeeper);
    }

    #[test]
    fn unknown_role_rejected() {
        assert!(Role::parse("Striker").is_err());
    }

    #[test]
    fn filter_parses_all_sentinel() {
        assert_eq!(RosterFilter::parse("all"), Ok(RosterFilter::All));
        assert_eq!(
            RosterFilter::parse("Bowler"),
            Ok(RosterFilter::Role(Role::Bowler))
        );
        assert!(RosterFilter::parse("everything").is_err());
    }

    #[test]
    fn status_derivation() {
        assert_eq!(DraftStatus::derive(0, false), DraftStatus::Empty);
        assert_eq!(DraftStatus::derive(1, false), DraftStatus::Partial);
        assert_eq!(DraftStatus::derive(10, false), DraftStatus::Partial);
        assert_eq!(DraftStatus::derive(11, false), DraftStatus::Full);
        assert_eq!(DraftStatus::derive(11, true), DraftStatus::Submitted);
    }

    #[test]
    fn status_display() {
        assert_eq!(DraftStatus::Empty.to_string(), "empty");
        assert_eq!(DraftStatus::Partial.to_string(), "partial");
        assert_eq!(DraftStatus::Full.to_string(), "full");
        assert_eq!(DraftStatus::Submitted.to_string(), "submitted");
    }
}
