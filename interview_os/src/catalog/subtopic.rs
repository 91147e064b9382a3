//! Subtopic definitions - the articles served inside a topic.

use serde::{Deserialize, Serialize};
use topic_content::TopicContent;

use super::Category;

/// A single reference article inside a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    /// Slug, expected to be unique within the enclosing topic.
    pub id: String,

    pub title: String,

    /// Pre-authored HTML, passed through untouched.
    pub content: String,

    /// Thematic label; only set inside categorised topics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Subtopic {
    /// Create a new uncategorised subtopic.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: None,
        }
    }

    /// Copy a content record out of the library.
    pub fn from_content(record: &TopicContent) -> Self {
        Self::new(record.id, record.title, record.content)
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Check if this subtopic belongs to a category.
    pub fn in_category(&self, category: Category) -> bool {
        self.category == Some(category)
    }
}

impl From<&TopicContent> for Subtopic {
    fn from(record: &TopicContent) -> Self {
        Subtopic::from_content(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topic_content::distributed::CAP_THEOREM;

    #[test]
    fn test_subtopic_creation() {
        let sub = Subtopic::new("cap-theorem", "CAP Theorem", "<p>C, A, P</p>");
        assert_eq!(sub.id, "cap-theorem");
        assert_eq!(sub.title, "CAP Theorem");
        assert!(sub.category.is_none());
    }

    #[test]
    fn test_from_content_copies_verbatim() {
        let sub = Subtopic::from_content(&CAP_THEOREM);
        assert_eq!(sub.id, CAP_THEOREM.id);
        assert_eq!(sub.title, CAP_THEOREM.title);
        assert_eq!(sub.content, CAP_THEOREM.content);
        assert!(sub.category.is_none());
    }

    #[test]
    fn test_with_category() {
        let sub = Subtopic::from(&CAP_THEOREM).with_category(Category::DistributedSystemsTheory);
        assert!(sub.in_category(Category::DistributedSystemsTheory));
        assert!(!sub.in_category(Category::DatabaseFundamentals));
    }

    #[test]
    fn test_category_omitted_when_absent() {
        let plain = serde_json::to_value(Subtopic::new("a", "A", "x")).unwrap();
        assert!(plain.get("category").is_none());

        let tagged =
            serde_json::to_value(Subtopic::new("a", "A", "x").with_category(Category::DevOpsAndInfrastructure))
                .unwrap();
        assert_eq!(tagged["category"], "DevOps & Infrastructure");
    }
}
