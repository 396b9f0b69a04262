/// Membership registry — which groups the current user has joined.
///
/// Session-scoped and never persisted: created empty when the groups list
/// screen mounts, gone on process restart. The only mutation is `toggle`,
/// which is an involution per group id: two toggles restore the prior state.
///
/// Membership is deliberately decoupled from catalog validation — toggling
/// an id the catalog has never heard of is accepted, and `is_joined` on an
/// unknown id simply answers `false`. Joining never adjusts the catalog's
/// `member_count` seed value.
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// MembershipRegistry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MembershipRegistry {
    joined: BTreeSet<String>,
}

impl MembershipRegistry {
    /// Fresh registry with nothing joined.
    pub fn new() -> Self {
        MembershipRegistry {
            joined: BTreeSet::new(),
        }
    }

    /// True iff the group is currently joined. Never fails.
    pub fn is_joined(&self, group_id: &str) -> bool {
        self.joined.contains(group_id)
    }

    /// Flip membership for a group id and return the new joined state.
    ///
    /// Per-id state machine: {NotJoined, Joined}, initial NotJoined, no
    /// terminal state. This operation cannot fail.
    pub fn toggle(&mut self, group_id: &str) -> bool {
        if self.joined.remove(group_id) {
            log::debug!("membership: left group {}", group_id);
            false
        } else {
            self.joined.insert(group_id.to_string());
            log::debug!("membership: joined group {}", group_id);
            true
        }
    }

    pub fn joined_count(&self) -> usize {
        self.joined.len()
    }

    /// Joined ids in deterministic (lexicographic) order.
    pub fn joined(&self) -> impl Iterator<Item = &str> {
        self.joined.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
