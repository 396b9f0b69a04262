//! # Focus Groups Core
//!
//! **Client-side state engine for the Focus Groups mobile app shell.**
//!
//! The app shell (screens, navigation, styling) is a thin rendering layer;
//! everything it displays and every action it triggers flows through this
//! crate. All state is held purely in transient memory — there is no network
//! layer, no persistence, and no authentication. On process restart every
//! registry and buffer starts empty again, by design.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Immutable group catalog, unique-id validation, lookup |
//! | [`membership`] | Joined-group set with idempotent toggle semantics |
//! | [`conversation`] | Append-only, insertion-ordered local message buffer |
//! | [`session`] | View-scoped state objects and renderable view models |
//!
//! ## Collaborator contract
//!
//! The shell provides two capabilities: routing (maps an opaque group id to
//! a detail view, id passed through unmodified) and rendering (displays an
//! ordered list of items keyed by a stable unique id, re-rendered whenever
//! the underlying state changes). The core guarantees id stability and
//! uniqueness within every list it hands out, and turns every recoverable
//! condition (unknown group id, empty list, empty conversation) into an
//! explicit renderable state rather than an error.

// Crate-level lint configuration — suppress stylistic warnings that don't affect correctness.
#![allow(clippy::empty_line_after_doc_comments, clippy::doc_lazy_continuation)]

// ── Public modules ──────────────────────────────────────────────────────────

/// Static group catalog: records, validation, and lookup.
pub mod catalog;

/// Locally composed chat messages and the per-conversation buffer.
pub mod conversation;

/// The joined-group registry for the current user.
pub mod membership;

/// Screen-lifetime state objects and the view structs the shell renders.
pub mod session;

// ── Re-exports for convenience ──────────────────────────────────────────────

pub use catalog::{CatalogError, Group, GroupCatalog};
pub use conversation::{ConversationBuffer, Message, LOCAL_AUTHOR};
pub use membership::MembershipRegistry;
pub use session::{
    ConversationHeader, ConversationSession, ConversationView, GroupCardView, GroupsListView,
    GroupsSession, MessageView, EMPTY_CATALOG_PLACEHOLDER, EMPTY_CONVERSATION_PLACEHOLDER,
    GROUP_NOT_FOUND_PLACEHOLDER,
};

// ── Library metadata ────────────────────────────────────────────────────────

/// Focus Groups core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version() -> &'static str {
    VERSION
}

// ── Tests ───────────────────────────────────────────────────────────────────
