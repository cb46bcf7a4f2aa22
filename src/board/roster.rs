use std::collections::HashSet;

use crate::error::BoardError;
use crate::models::TeamMember;

/// Display label for an assignee id that is not on the roster.
pub const UNKNOWN_MEMBER: &str = "Unknown";

/// The fixed set of team members cards can be assigned to.
///
/// Seeded once and never resized during a session. Member ids are unique.
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new(members: Vec<TeamMember>) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(BoardError::DuplicateMember(member.id));
            }
        }
        Ok(Self { members })
    }

    pub fn find_by_id(&self, id: i64) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn exists(&self, id: i64) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn name_or_unknown(&self, id: i64) -> &str {
        self.find_by_id(id)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MEMBER)
    }

    /// Members in seed order.
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            members: default_members(),
        }
    }
}

pub fn default_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new(1, "John Doe"),
        TeamMember::new(2, "Jane Smith"),
        TeamMember::new(3, "Peter Jones"),
        TeamMember::new(4, "Alice Brown"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let roster = Roster::default();
        assert_eq!(roster.find_by_id(2).map(|m| m.name.as_str()), Some("Jane Smith"));
        assert!(roster.find_by_id(99).is_none());
        assert!(roster.exists(4));
        assert!(!roster.exists(0));
    }

    #[test]
    fn test_name_falls_back_to_unknown() {
        let roster = Roster::default();
        assert_eq!(roster.name_or_unknown(3), "Peter Jones");
        assert_eq!(roster.name_or_unknown(42), "Unknown");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Roster::new(vec![TeamMember::new(1, "A"), TeamMember::new(1, "B")]);
        assert_eq!(result.unwrap_err(), BoardError::DuplicateMember(1));
    }
}
