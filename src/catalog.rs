/// Static group catalog — the communities the app knows about.
///
/// The catalog is read-only input supplied once at process start, either the
/// built-in seed or a JSON document from the host app. It is immutable for
/// the process lifetime: join/leave actions never touch catalog fields, and
/// `member_count` stays at its static seed value regardless of membership.
///
/// Group ids are the keying contract with the rendering collaborator, so
/// uniqueness is validated at construction time.
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate group id in catalog: {0}")]
    DuplicateGroupId(String),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// One catalog entry. `id` is opaque and unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Static seed value — not adjusted by join/leave actions.
    pub member_count: u32,
}

impl Group {
    pub fn serialize(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ---------------------------------------------------------------------------
// GroupCatalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GroupCatalog {
    groups: Vec<Group>,
}

impl GroupCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(groups: Vec<Group>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for group in &groups {
            if !seen.insert(group.id.as_str()) {
                return Err(CatalogError::DuplicateGroupId(group.id.clone()));
            }
        }
        log::debug!("catalog: loaded {} groups", groups.len());
        Ok(GroupCatalog { groups })
    }

    /// Load a catalog from a JSON array of groups (the host-app seed format).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<Group> = serde_json::from_str(json)?;
        Self::new(groups)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.groups)
    }

    /// Resolve an opaque id to its catalog entry.
    ///
    /// `None` is a recoverable, user-visible condition — the consuming view
    /// renders a "group not found" fallback instead of failing hard.
    pub fn find(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// All entries in list-screen display order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The built-in seed catalog the app ships with.
    pub fn builtin() -> &'static GroupCatalog {
        &BUILTIN
    }
}

static BUILTIN: Lazy<GroupCatalog> = Lazy::new(|| {
    GroupCatalog::new(vec![
        Group {
            id: "1".to_string(),
            title: "Fitness Fans".to_string(),
            description: "Motivation and exercise tips".to_string(),
            member_count: 19,
        },
        Group {
            id: "2".to_string(),
            title: "Mindful Meditation".to_string(),
            description: "Talk all things mindfulness".to_string(),
            member_count: 27,
        },
    ])
    .expect("built-in catalog ids are unique")
});

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
