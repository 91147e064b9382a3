//! Thematic categories for the must-know terms topic.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;

/// The eight buckets a must-know term can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Database Fundamentals")]
    DatabaseFundamentals,

    #[serde(rename = "Distributed Systems Theory")]
    DistributedSystemsTheory,

    #[serde(rename = "System Architecture & Scalability")]
    SystemArchitecture,

    #[serde(rename = "Security & Authentication")]
    SecurityAndAuthentication,

    #[serde(rename = "Networking & Protocols")]
    NetworkingAndProtocols,

    #[serde(rename = "DevOps & Infrastructure")]
    DevOpsAndInfrastructure,

    #[serde(rename = "Data Structures & Algorithms")]
    DataStructuresAndAlgorithms,

    #[serde(rename = "Performance & Reliability")]
    PerformanceAndReliability,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 8] = [
        Category::DatabaseFundamentals,
        Category::DistributedSystemsTheory,
        Category::SystemArchitecture,
        Category::SecurityAndAuthentication,
        Category::NetworkingAndProtocols,
        Category::DevOpsAndInfrastructure,
        Category::DataStructuresAndAlgorithms,
        Category::PerformanceAndReliability,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DatabaseFundamentals => "Database Fundamentals",
            Category::DistributedSystemsTheory => "Distributed Systems Theory",
            Category::SystemArchitecture => "System Architecture & Scalability",
            Category::SecurityAndAuthentication => "Security & Authentication",
            Category::NetworkingAndProtocols => "Networking & Protocols",
            Category::DevOpsAndInfrastructure => "DevOps & Infrastructure",
            Category::DataStructuresAndAlgorithms => "Data Structures & Algorithms",
            Category::PerformanceAndReliability => "Performance & Reliability",
        }
    }

    /// Kebab-case slug, usable in URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::DatabaseFundamentals => "database-fundamentals",
            Category::DistributedSystemsTheory => "distributed-systems-theory",
            Category::SystemArchitecture => "system-architecture-scalability",
            Category::SecurityAndAuthentication => "security-authentication",
            Category::NetworkingAndProtocols => "networking-protocols",
            Category::DevOpsAndInfrastructure => "devops-infrastructure",
            Category::DataStructuresAndAlgorithms => "data-structures-algorithms",
            Category::PerformanceAndReliability => "performance-reliability",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts either the label or the slug, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}
