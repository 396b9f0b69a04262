/// Conversation buffer — locally composed messages for one open group chat.
///
/// Append-only and insertion-ordered: no edit, delete, or reordering exists,
/// and display order is exactly compose order (oldest first). The buffer
/// lives only while its detail view is open; on close it is dropped, never
/// persisted, merged, or flushed anywhere. There is no transport layer and
/// no remote participants — every message is authored by the local user.
use serde::{Deserialize, Serialize};

/// Author label for locally composed messages. The only author this core
/// ever produces.
pub const LOCAL_AUTHOR: &str = "You";

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Collision-resistant id (UUID v4), unique within any session.
    pub id: String,
    pub author: String,
    /// Trimmed, non-empty display text.
    pub content: String,
    /// Wall-clock creation time, epoch seconds (UX only).
    pub timestamp: i64,
    /// Human-readable creation time for the chat row.
    pub timestamp_display: String,
}

impl Message {
    /// Build a locally authored message with fresh id and timestamps.
    fn compose_local(content: String) -> Self {
        let now = chrono::Local::now();
        Message {
            id: uuid::Uuid::new_v4().to_string(),
            author: LOCAL_AUTHOR.to_string(),
            content,
            timestamp: now.timestamp(),
            timestamp_display: now.format("%H:%M:%S").to_string(),
        }
    }

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
// ConversationBuffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ConversationBuffer {
    /// Weak reference to the group: lookup key, not ownership.
    group_id: String,
    messages: Vec<Message>,
}

impl ConversationBuffer {
    /// Fresh, empty buffer for one group's detail view.
    pub fn new(group_id: impl Into<String>) -> Self {
        ConversationBuffer {
            group_id: group_id.into(),
            messages: Vec::new(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Trim and append. Whitespace-only input is a silent no-op (`None`) —
    /// the shell's send button is disabled for such input, so this is not an
    /// error, just nothing to do. Otherwise the new message is appended to
    /// the end of the sequence and returned.
    pub fn compose(&mut self, raw: &str) -> Option<&Message> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = Message::compose_local(trimmed.to_string());
        log::debug!(
            "conversation {}: appended message {}",
            self.group_id,
            message.id
        );
        self.messages.push(message);
        self.messages.last()
    }

    /// Messages in display order (oldest first). An empty slice is a valid,
    /// renderable state.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = ConversationBuffer::new("1");
        assert!(buffer.is_empty());
        assert!(buffer.messages().is_empty());
        assert_eq!(buffer.group_id(), "1");
    }

    #[test]
    fn test_compose_appends_local_message() {
        let mut buffer = ConversationBuffer::new("1");

        let msg = buffer.compose("Hi there").unwrap();
        assert_eq!(msg.author, LOCAL_AUTHOR);
        assert_eq!(msg.content, "Hi there");
        assert!(!msg.id.is_empty());
        assert!(!msg.timestamp_display.is_empty());

        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_compose_trims_content() {
        let mut buffer = ConversationBuffer::new("1");
        let msg = buffer.compose("  hello \n").unwrap();
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_whitespace_only_is_noop() {
        let mut buffer = ConversationBuffer::new("1");
        buffer.compose("kept");

        assert!(buffer.compose("").is_none());
        assert!(buffer.compose("   ").is_none());
        assert!(buffer.compose("\t\n").is_none());

        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut buffer = ConversationBuffer::new("1");
        for text in ["first", "second", "third"] {
            buffer.compose(text);
        }

        let contents: Vec<&str> = buffer
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_content_not_deduplicated() {
        let mut buffer = ConversationBuffer::new("1");
        buffer.compose("same");
        buffer.compose("same");
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_ids_unique_under_rapid_compose() {
        let mut buffer = ConversationBuffer::new("1");
        for i in 0..100 {
            buffer.compose(&format!("msg {}", i));
        }

        let mut ids: Vec<&str> = buffer.messages().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_buffers_are_independent_per_group() {
        let mut a = ConversationBuffer::new("1");
        let mut b = ConversationBuffer::new("2");

        a.compose("only in a");
        b.compose("one");
        b.compose("two");

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_message_serialization() {
        let mut buffer = ConversationBuffer::new("1");
        let msg = buffer.compose("round trip").unwrap().clone();

        let bytes = msg.serialize().unwrap();
        let back = Message::deserialize(&bytes).unwrap();
        assert_eq!(back, msg);

        let json = msg.to_json().unwrap();
        let back = Message::from_json(&json).unwrap();
        assert_eq!(back.id, msg.id);
        assert_eq!(back.content, msg.content);
    }
}
