use super::{Message, Role};

pub type MemoryEntry = Message;

/// Rolling window of the most recent user/assistant exchanges.
#[derive(Clone, Debug)]
pub struct ConversationMemory {
    entries: Vec<MemoryEntry>,
    limit: usize,
}

impl ConversationMemory {
    pub fn new(limit: usize) -> Self {
        ConversationMemory {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn append(&mut self, user_text: &str, assistant_text: &str) {
        self.entries.push(Message::new(Role::User, user_text));
        self.entries.push(Message::new(Role::Assistant, assistant_text));

        let cap = self.limit * 2;
        if self.entries.len() > cap {
            let excess = self.entries.len() - cap;
            self.entries.drain(..excess);
        }
    }

    pub fn as_context(&self) -> &[MemoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
