//! Topic definitions - top-level navigation groups.

use serde::{Deserialize, Serialize};

use super::Subtopic;

/// A navigation group holding an ordered list of subtopics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub subtopics: Vec<Subtopic>,
}

impl Topic {
    /// Create an empty topic.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtopics: Vec::new(),
        }
    }

    /// Append a subtopic.
    pub fn with_subtopic(mut self, subtopic: Subtopic) -> Self {
        self.subtopics.push(subtopic);
        self
    }

    /// Append several subtopics, preserving their order.
    pub fn with_subtopics(mut self, subtopics: impl IntoIterator<Item = Subtopic>) -> Self {
        self.subtopics.extend(subtopics);
        self
    }

    /// Find a subtopic by id. When ids collide the first one wins.
    pub fn subtopic(&self, id: &str) -> Option<&Subtopic> {
        self.subtopics.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.subtopics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtopics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_builder_preserves_order() {
        let topic = Topic::new("aws", "AWS")
            .with_subtopic(Subtopic::new("b", "B", "x"))
            .with_subtopics([Subtopic::new("a", "A", "y"), Subtopic::new("c", "C", "z")]);

        let ids: Vec<_> = topic.subtopics.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(topic.len(), 3);
        assert!(!topic.is_empty());
    }

    #[test]
    fn test_subtopic_lookup_first_wins() {
        let topic = Topic::new("t", "T")
            .with_subtopic(Subtopic::new("dup", "First", "1"))
            .with_subtopic(Subtopic::new("dup", "Second", "2"));

        assert_eq!(topic.len(), 2);
        assert_eq!(topic.subtopic("dup").unwrap().title, "First");
        assert!(topic.subtopic("missing").is_none());
    }
}
