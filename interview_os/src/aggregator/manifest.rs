//! Catalog layout: which library records go into which topic, in what order.
//!
//! Every record is referenced by its constant, so a renamed or missing
//! article fails the build instead of silently vanishing from the catalog.

use topic_content::{
    acronyms, algorithms, architecture, databases, devops, distributed, networking, performance,
    platforms, security, system_design, TopicContent,
};

use crate::catalog::Category;

/// Id of the categorised, alphabetically sorted topic.
pub const MUST_KNOW_TERMS: &str = "must-know-terms";

/// Where a topic's subtopics come from.
#[derive(Debug, Clone, Copy)]
pub enum TopicSource {
    /// Records served as-is, in authoring order.
    Plain(&'static [TopicContent]),

    /// Records tagged with a category, group by group.
    Categorised(&'static [(Category, &'static [TopicContent])]),
}

impl TopicSource {
    /// Number of records this source contributes.
    pub fn len(&self) -> usize {
        match self {
            TopicSource::Plain(records) => records.len(),
            TopicSource::Categorised(groups) => groups.iter().map(|(_, records)| records.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of the navigation layout.
#[derive(Debug, Clone, Copy)]
pub struct TopicLayout {
    pub id: &'static str,
    pub title: &'static str,
    pub source: TopicSource,
}

const fn topic(id: &'static str, title: &'static str, source: TopicSource) -> TopicLayout {
    TopicLayout { id, title, source }
}

const MUST_KNOW_GROUPS: &[(Category, &[TopicContent])] = &[
    (Category::DatabaseFundamentals, databases::ALL),
    (Category::DistributedSystemsTheory, distributed::ALL),
    (Category::SystemArchitecture, architecture::ALL),
    (Category::SecurityAndAuthentication, security::ALL),
    (Category::NetworkingAndProtocols, networking::ALL),
    (Category::DevOpsAndInfrastructure, devops::ALL),
    (Category::DataStructuresAndAlgorithms, algorithms::ALL),
    (Category::PerformanceAndReliability, performance::ALL),
];

/// The navigation layout served by the application.
pub const LAYOUT: &[TopicLayout] = &[
    topic("acronyms", "Acronyms", TopicSource::Plain(acronyms::ALL)),
    topic(
        MUST_KNOW_TERMS,
        "Must know Terms",
        TopicSource::Categorised(MUST_KNOW_GROUPS),
    ),
    topic(
        "system-design",
        "System Design",
        TopicSource::Plain(system_design::ALL),
    ),
    topic(
        "kafka-zookeeper",
        "Kafka & Zookeeper",
        TopicSource::Plain(&[platforms::KAFKA_ZOOKEEPER]),
    ),
    topic("redis", "Redis Cache", TopicSource::Plain(&[platforms::REDIS_CACHE])),
    topic("aws", "AWS", TopicSource::Plain(&[platforms::AWS])),
    topic("rabbitmq", "RabbitMQ", TopicSource::Plain(&[platforms::RABBITMQ])),
    topic("docker", "Docker", TopicSource::Plain(&[platforms::DOCKER])),
    topic(
        "kubernetes",
        "Kubernetes",
        TopicSource::Plain(&[platforms::KUBERNETES]),
    ),
    topic(
        "elasticsearch",
        "Elasticsearch",
        TopicSource::Plain(&[platforms::ELASTICSEARCH]),
    ),
    topic("mongodb", "MongoDB", TopicSource::Plain(&[platforms::MONGODB])),
    topic(
        "postgresql",
        "PostgreSQL",
        TopicSource::Plain(&[platforms::POSTGRESQL]),
    ),
    topic("cassandra", "Cassandra", TopicSource::Plain(&[platforms::CASSANDRA])),
    topic("nginx", "Nginx", TopicSource::Plain(&[platforms::NGINX])),
    topic("terraform", "Terraform", TopicSource::Plain(&[platforms::TERRAFORM])),
    topic("git", "Git", TopicSource::Plain(&[platforms::GIT])),
    topic("linux", "Linux", TopicSource::Plain(&[platforms::LINUX])),
    topic("graphql", "GraphQL", TopicSource::Plain(&[platforms::GRAPHQL])),
];
