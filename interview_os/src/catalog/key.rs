//! Stable content addresses.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CatalogError;

/// Namespace for deriving content keys. Changing it invalidates every stored key.
const CONTENT_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_9d3b_5c70_8e21_b4d6_a9f0_3e57);

/// Opaque, stable identifier of one subtopic.
///
/// Derived deterministically from the topic id and subtopic id, so the same
/// article maps to the same key in every build and every process. The topic id
/// names a v5 namespace of its own and the subtopic id is hashed inside it, so
/// ids containing `/` cannot alias another pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentKey(pub Uuid);

impl ContentKey {
    /// Key for the subtopic `subtopic_id` inside `topic_id`.
    pub fn for_subtopic(topic_id: &str, subtopic_id: &str) -> Self {
        let topic_namespace = Uuid::new_v5(&CONTENT_NAMESPACE, topic_id.as_bytes());
        Self(Uuid::new_v5(&topic_namespace, subtopic_id.as_bytes()))
    }

    /// Key for a parsed path.
    pub fn from_path(path: &ContentPath) -> Self {
        Self::for_subtopic(&path.topic, &path.subtopic)
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable route to a subtopic: `topic-id/subtopic-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentPath {
    pub topic: String,
    pub subtopic: String,
}

impl ContentPath {
    pub fn new(topic: impl Into<String>, subtopic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            subtopic: subtopic.into(),
        }
    }
}

impl std::fmt::Display for ContentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.topic, self.subtopic)
    }
}

impl FromStr for ContentPath {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        match trimmed.split_once('/') {
            Some((topic, subtopic))
                if !topic.is_empty() && !subtopic.is_empty() && !subtopic.contains('/') =>
            {
                Ok(ContentPath::new(topic, subtopic))
            }
            _ => Err(CatalogError::InvalidPath(s.to_string())),
        }
    }
}
