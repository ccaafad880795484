//! Per-session conversation log.

use crate::types::Turn;

/// Append-only, chronologically ordered log of turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a turn to the end of the log.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Add a turn and return a reference to it.
    pub fn push(&mut self, turn: Turn) -> &Turn {
        let index = self.turns.len();
        self.turns.push(turn);
        &self.turns[index]
    }

    /// All turns, oldest first.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn starts_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("same"));
        conversation.append(Turn::user("same"));
        conversation.append(Turn::assistant("reply"));

        assert_eq!(conversation.len(), 3);
        let roles: Vec<Role> = conversation.iter().map(Turn::role).collect();
        assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
        assert_eq!(conversation.last().map(Turn::content), Some("reply"));
    }

    #[test]
    fn push_returns_the_stored_turn() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("Hello"));

        let pushed = conversation.push(Turn::assistant("Hi there")).clone();

        assert_eq!(pushed, Turn::assistant("Hi there"));
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.last(), Some(&pushed));
    }
}
