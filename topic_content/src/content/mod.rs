//! Reference articles grouped by theme.
//!
//! Each module exposes its articles as individual constants plus an `ALL`
//! slice in authoring order.

pub mod acronyms;
pub mod algorithms;
pub mod architecture;
pub mod databases;
pub mod devops;
pub mod distributed;
pub mod networking;
pub mod performance;
pub mod platforms;
pub mod security;
pub mod system_design;

use serde::Serialize;

/// One authored article: a stable slug, a display title and an opaque body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TopicContent {
    /// Slug used as the lookup and routing key.
    pub id: &'static str,
    pub title: &'static str,
    /// Trusted HTML body, rendered as-is by the presentation layer.
    pub content: &'static str,
}

impl TopicContent {
    /// Create a content record.
    pub const fn new(id: &'static str, title: &'static str, content: &'static str) -> Self {
        Self { id, title, content }
    }
}

impl std::fmt::Display for TopicContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// Every article compiled into the library, module by module.
pub fn library() -> Vec<&'static TopicContent> {
    [
        acronyms::ALL,
        databases::ALL,
        distributed::ALL,
        architecture::ALL,
        security::ALL,
        networking::ALL,
        devops::ALL,
        algorithms::ALL,
        performance::ALL,
        system_design::ALL,
        platforms::ALL,
    ]
    .into_iter()
    .flatten()
    .collect()
}
