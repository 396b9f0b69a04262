/// View-scoped state objects and the renderable view models the shell draws.
///
/// Each screen of the app shell owns exactly one of these for its lifetime:
/// `GroupsSession` for the groups list, `ConversationSession` for a group
/// detail view. Both are plain owned values created on mount and dropped on
/// unmount — no process-wide singletons, so concurrent views (future
/// multi-window) never collide.
///
/// The `*View` structs are the rendering collaborator's input: ordered rows
/// keyed by stable unique ids, with every fallback condition (empty catalog,
/// unknown group id, empty conversation) expressed as explicit placeholder
/// text rather than an error.
use serde::Serialize;

use crate::catalog::{Group, GroupCatalog};
use crate::conversation::{ConversationBuffer, Message, LOCAL_AUTHOR};
use crate::membership::MembershipRegistry;

/// Groups list screen header.
pub const GROUPS_HEADER: &str = "Focus Groups";

/// List placeholder when the catalog has no groups.
pub const EMPTY_CATALOG_PLACEHOLDER: &str = "No groups found. Create the first group!";

/// Chat placeholder before the first message is composed.
pub const EMPTY_CONVERSATION_PLACEHOLDER: &str = "No messages yet. Start the conversation!";

/// Fallback body when routing hands over an id the catalog does not know.
pub const GROUP_NOT_FOUND_PLACEHOLDER: &str = "Group not found.";

// ---------------------------------------------------------------------------
// Groups list
// ---------------------------------------------------------------------------

/// One card row on the groups list, keyed by the stable group id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Static seed value — join/leave does not adjust it.
    pub member_count: u32,
    pub joined: bool,
    /// Button caption: "Join" when not joined, "Leave" when joined.
    pub action_label: &'static str,
}

/// The whole groups list screen.
#[derive(Debug, Clone, Serialize)]
pub struct GroupsListView {
    pub header: &'static str,
    pub cards: Vec<GroupCardView>,
    /// Present only when there are no cards to render.
    pub placeholder: Option<&'static str>,
}

/// State owned by the groups list screen: the shared read-only catalog plus
/// this session's membership registry.
#[derive(Debug)]
pub struct GroupsSession<'a> {
    catalog: &'a GroupCatalog,
    membership: MembershipRegistry,
}

impl<'a> GroupsSession<'a> {
    /// Mount the list screen over a catalog. Membership starts empty.
    pub fn new(catalog: &'a GroupCatalog) -> Self {
        GroupsSession {
            catalog,
            membership: MembershipRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &GroupCatalog {
        self.catalog
    }

    pub fn membership(&self) -> &MembershipRegistry {
        &self.membership
    }

    pub fn is_joined(&self, group_id: &str) -> bool {
        self.membership.is_joined(group_id)
    }

    /// Join/leave button handler. Returns the new joined state.
    pub fn toggle_membership(&mut self, group_id: &str) -> bool {
        self.membership.toggle(group_id)
    }

    /// Ordered card rows in catalog order.
    pub fn card_views(&self) -> Vec<GroupCardView> {
        self.catalog
            .groups()
            .iter()
            .map(|group| self.card_view(group))
            .collect()
    }

    /// The full screen: header, cards, and the empty-catalog placeholder.
    pub fn list_view(&self) -> GroupsListView {
        let cards = self.card_views();
        let placeholder = cards.is_empty().then_some(EMPTY_CATALOG_PLACEHOLDER);
        GroupsListView {
            header: GROUPS_HEADER,
            cards,
            placeholder,
        }
    }

    fn card_view(&self, group: &Group) -> GroupCardView {
        let joined = self.membership.is_joined(&group.id);
        GroupCardView {
            id: group.id.clone(),
            title: group.title.clone(),
            description: group.description.clone(),
            member_count: group.member_count,
            joined,
            action_label: if joined { "Leave" } else { "Join" },
        }
    }
}

// ---------------------------------------------------------------------------
// Group detail / conversation
// ---------------------------------------------------------------------------

/// Detail screen header, present only when the group resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationHeader {
    pub title: String,
    pub description: String,
}

/// One chat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    /// True for locally composed rows (the shell right-aligns these).
    pub is_local: bool,
}

/// The whole detail screen. A `None` header with the not-found placeholder
/// is the recoverable unknown-id state.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationView {
    pub header: Option<ConversationHeader>,
    pub messages: Vec<MessageView>,
    pub placeholder: Option<&'static str>,
}

/// State owned by one open group detail view: the resolved catalog entry
/// (if any) and this view's conversation buffer. Dropped on unmount —
/// nothing survives closing the screen.
#[derive(Debug)]
pub struct ConversationSession<'a> {
    group: Option<&'a Group>,
    buffer: ConversationBuffer,
}

impl<'a> ConversationSession<'a> {
    /// Mount a detail view for the routed group id.
    ///
    /// An id the catalog does not know yields the not-found session state;
    /// its view renders the fallback text instead of failing hard.
    pub fn open(catalog: &'a GroupCatalog, group_id: &str) -> Self {
        let group = catalog.find(group_id);
        if group.is_none() {
            log::info!(
                "conversation: unknown group id {:?}, rendering not-found fallback",
                group_id
            );
        }
        ConversationSession {
            group,
            buffer: ConversationBuffer::new(group_id),
        }
    }

    pub fn group(&self) -> Option<&Group> {
        self.group
    }

    pub fn is_found(&self) -> bool {
        self.group.is_some()
    }

    /// Send-button handler. Whitespace-only input is a silent no-op, and so
    /// is sending into the not-found state (there is no conversation to
    /// append to).
    pub fn send_message(&mut self, raw: &str) -> Option<&Message> {
        if self.group.is_none() {
            return None;
        }
        self.buffer.compose(raw)
    }

    /// Messages in display order (oldest first).
    pub fn messages(&self) -> &[Message] {
        self.buffer.messages()
    }

    /// The full screen for the current state.
    pub fn view(&self) -> ConversationView {
        let Some(group) = self.group else {
            return ConversationView {
                header: None,
                messages: Vec::new(),
                placeholder: Some(GROUP_NOT_FOUND_PLACEHOLDER),
            };
        };

        let messages: Vec<MessageView> = self
            .buffer
            .messages()
            .iter()
            .map(|message| MessageView {
                id: message.id.clone(),
                author: message.author.clone(),
                content: message.content.clone(),
                timestamp: message.timestamp_display.clone(),
                is_local: message.author == LOCAL_AUTHOR,
            })
            .collect();
        let placeholder = messages
            .is_empty()
            .then_some(EMPTY_CONVERSATION_PLACEHOLDER);

        ConversationView {
            header: Some(ConversationHeader {
                title: group.title.clone(),
                description: group.description.clone(),
            }),
            messages,
            placeholder,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
