//! Roles and session status
//!
//! `SessionStatus` is the single value the presentation layer consumes:
//! the wizard emits it on every transition, and widget enablement is
//! derived from it alone.

use serde::{Deserialize, Serialize};

/// One of the four ordered pick groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The single fixed pivot atom (role 0, exactly one member)
    Anchor,
    /// First arm (role 1, at least one member)
    Arm1,
    /// Second arm (role 2, at least one member)
    Arm2,
    /// Third arm (role 3, at least one member)
    Arm3,
}

impl Role {
    /// All roles in picking order
    pub const ALL: [Role; 4] = [Role::Anchor, Role::Arm1, Role::Arm2, Role::Arm3];

    /// Ordinal of the role (0-3)
    pub fn index(&self) -> usize {
        match self {
            Role::Anchor => 0,
            Role::Arm1 => 1,
            Role::Arm2 => 2,
            Role::Arm3 => 3,
        }
    }

    /// Role from an ordinal, if valid
    pub fn from_index(index: usize) -> Option<Role> {
        Role::ALL.get(index).copied()
    }

    /// The role collected after this one, or `None` after the third arm
    pub fn next(&self) -> Option<Role> {
        Role::from_index(self.index() + 1)
    }

    /// Minimum number of members required for this role
    pub fn min_members(&self) -> usize {
        1
    }

    /// Whether this role is capped at a single member
    pub fn is_singleton(&self) -> bool {
        matches!(self, Role::Anchor)
    }

    /// Human-readable name for prompts and messages
    pub fn label(&self) -> &'static str {
        match self {
            Role::Anchor => "anchor",
            Role::Arm1 => "first arm",
            Role::Arm2 => "second arm",
            Role::Arm3 => "third arm",
        }
    }
}

/// Classification of recoverable session errors, carried by
/// [`SessionStatus::Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Axis-defining atoms are collinear
    DegenerateGeometry,
    /// A bond was picked instead of an atom
    InvalidPick,
    /// Angle manipulation requested before all roles were finalized
    IncompleteSession,
    /// Typed angle outside the allowed range
    AngleOutOfRange,
}

/// Status emitted by the wizard on every transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No session running
    NotStarted,
    /// Collecting picks for the given role
    Picking(Role),
    /// All four roles finalized; angle controls may be enabled
    ReadyForAngle,
    /// A recoverable error was reported; the previous state is re-entered
    /// on the next successful operation
    Error(ErrorKind),
}

impl SessionStatus {
    /// Whether a picking session is in progress
    pub fn is_picking(&self) -> bool {
        matches!(self, SessionStatus::Picking(_))
    }

    /// Whether angle manipulation is allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionStatus::ReadyForAngle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order() {
        assert_eq!(Role::Anchor.next(), Some(Role::Arm1));
        assert_eq!(Role::Arm1.next(), Some(Role::Arm2));
        assert_eq!(Role::Arm2.next(), Some(Role::Arm3));
        assert_eq!(Role::Arm3.next(), None);
    }

    #[test]
    fn test_role_index_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_index(role.index()), Some(role));
        }
        assert_eq!(Role::from_index(4), None);
    }

    #[test]
    fn test_singleton_anchor() {
        assert!(Role::Anchor.is_singleton());
        assert!(!Role::Arm1.is_singleton());
    }

    #[test]
    fn test_status_queries() {
        assert!(SessionStatus::Picking(Role::Arm2).is_picking());
        assert!(!SessionStatus::ReadyForAngle.is_picking());
        assert!(SessionStatus::ReadyForAngle.is_ready());
        assert!(!SessionStatus::Error(ErrorKind::InvalidPick).is_ready());
    }
}
