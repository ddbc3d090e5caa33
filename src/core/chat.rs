use crate::core::search::{generate_reply, search_restaurants};
use crate::models::{ChatMessage, Restaurant};

const GREETING: &str = "Hi, this is Mat.zip! What kind of place are you craving?";

/// Append-only conversation log seeded with the assistant greeting
///
/// Messages are never edited or removed; `clear` resets the whole log back to
/// the greeting.
#[derive(Debug)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Run a query through the search rules and record both sides of the
    /// exchange; returns the assistant message that was appended
    pub fn submit(&mut self, query: &str) -> &ChatMessage {
        self.messages.push(ChatMessage::user(query));

        let restaurants = search_restaurants(query);
        let reply = generate_reply(query, &restaurants);
        tracing::debug!(query, results = restaurants.len(), "search completed");

        let assistant = ChatMessage::assistant(reply).with_restaurants(restaurants);
        self.messages.push(assistant);
        self.messages.last().expect("just pushed")
    }

    /// Restaurants attached to the most recent assistant reply, if any
    pub fn latest_results(&self) -> Option<&[Restaurant]> {
        self.messages
            .iter()
            .rev()
            .find_map(|m| m.restaurants.as_deref())
    }

    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::assistant(GREETING)];
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
