//! AppData - the fully assembled catalog handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{Category, ContentKey, ContentPath, Subtopic, Topic};
use crate::error::{CatalogError, Result};

/// The assembled catalog.
///
/// Serializes to `{ "topics": [...] }`. Lookup indexes are rebuilt whenever
/// the catalog is constructed or deserialized and never serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "AppDataWire")]
pub struct AppData {
    topics: Vec<Topic>,

    #[serde(skip)]
    index: CatalogIndex,
}

#[derive(Deserialize)]
struct AppDataWire {
    topics: Vec<Topic>,
}

impl From<AppDataWire> for AppData {
    fn from(wire: AppDataWire) -> Self {
        AppData::from_topics(wire.topics)
    }
}

/// Positions of topics and subtopics. First occurrence wins on id collisions.
#[derive(Debug, Clone, Default)]
struct CatalogIndex {
    /// Topic id -> position in `topics`.
    topic_by_id: HashMap<String, usize>,

    /// (topic position, subtopic id) -> subtopic position.
    subtopic_by_id: HashMap<(usize, String), usize>,

    /// Content key -> (topic position, subtopic position).
    subtopic_by_key: HashMap<ContentKey, (usize, usize)>,
}

impl CatalogIndex {
    fn build(topics: &[Topic]) -> Self {
        let mut index = CatalogIndex::default();
        for (t, topic) in topics.iter().enumerate() {
            index.topic_by_id.entry(topic.id.clone()).or_insert(t);
            for (s, sub) in topic.subtopics.iter().enumerate() {
                index.subtopic_by_id.entry((t, sub.id.clone())).or_insert(s);
                index
                    .subtopic_by_key
                    .entry(ContentKey::for_subtopic(&topic.id, &sub.id))
                    .or_insert((t, s));
            }
        }
        index
    }
}

impl AppData {
    /// Build a catalog from topics, keeping their order.
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        let index = CatalogIndex::build(&topics);
        Self { topics, index }
    }

    /// All topics in navigation order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Get a topic by id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.index.topic_by_id.get(id).map(|&t| &self.topics[t])
    }

    /// Get a subtopic by topic id and subtopic id.
    pub fn subtopic(&self, topic_id: &str, subtopic_id: &str) -> Option<&Subtopic> {
        let &t = self.index.topic_by_id.get(topic_id)?;
        let &s = self.index.subtopic_by_id.get(&(t, subtopic_id.to_string()))?;
        Some(&self.topics[t].subtopics[s])
    }

    /// Get a subtopic and its topic by content key.
    pub fn by_key(&self, key: ContentKey) -> Option<(&Topic, &Subtopic)> {
        let &(t, s) = self.index.subtopic_by_key.get(&key)?;
        let topic = &self.topics[t];
        let sub = &topic.subtopics[s];
        (ContentKey::for_subtopic(&topic.id, &sub.id) == key).then_some((topic, sub))
    }

    /// Resolve a `topic/subtopic` route.
    pub fn resolve(&self, path: &str) -> Result<(&Topic, &Subtopic)> {
        let path: ContentPath = path.parse()?;
        let topic = self
            .topic(&path.topic)
            .ok_or_else(|| CatalogError::UnknownTopic(path.topic.clone()))?;

        topic
            .subtopic(&path.subtopic)
            .map(|sub| (topic, sub))
            .ok_or(CatalogError::UnknownSubtopic {
                topic: topic.id.clone(),
                id: path.subtopic,
            })
    }

    /// All subtopics filed under a category, in catalog order.
    pub fn subtopics_by_category(&self, category: Category) -> Vec<&Subtopic> {
        self.iter_subtopics()
            .map(|(_, sub)| sub)
            .filter(|sub| sub.in_category(category))
            .collect()
    }

    /// Number of subtopics per category. Categories with no entries are omitted.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for (_, sub) in self.iter_subtopics() {
            if let Some(category) = sub.category {
                *counts.entry(category).or_default() += 1;
            }
        }
        counts
    }

    /// Every subtopic paired with its topic, in catalog order.
    pub fn iter_subtopics(&self) -> impl Iterator<Item = (&Topic, &Subtopic)> {
        self.topics
            .iter()
            .flat_map(|topic| topic.subtopics.iter().map(move |sub| (topic, sub)))
    }

    /// Get the total number of subtopics.
    pub fn subtopic_count(&self) -> usize {
        self.topics.iter().map(Topic::len).sum()
    }

    /// Get the total number of topics.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

impl PartialEq for AppData {
    fn eq(&self, other: &Self) -> bool {
        self.topics == other.topics
    }
}

impl Eq for AppData {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppData {
        AppData::from_topics(vec![
            Topic::new("must-know-terms", "Must know Terms")
                .with_subtopic(
                    Subtopic::new("cap-theorem", "CAP Theorem", "<p>cap</p>")
                        .with_category(Category::DistributedSystemsTheory),
                )
                .with_subtopic(
                    Subtopic::new("tcp-vs-udp", "TCP vs UDP", "<p>tcp</p>")
                        .with_category(Category::NetworkingAndProtocols),
                )
                .with_subtopic(
                    Subtopic::new("vector-clocks", "Vector Clocks", "<p>vc</p>")
                        .with_category(Category::DistributedSystemsTheory),
                ),
            Topic::new("aws", "AWS").with_subtopic(Subtopic::new(
                "aws-core-services",
                "AWS Core Services",
                "<p>aws</p>",
            )),
        ])
    }

    #[test]
    fn test_topic_lookup() {
        let data = sample();
        assert_eq!(data.topic("aws").unwrap().title, "AWS");
        assert!(data.topic("gcp").is_none());
        assert_eq!(data.topic_count(), 2);
        assert_eq!(data.subtopic_count(), 4);
    }

    #[test]
    fn test_subtopic_lookup() {
        let data = sample();
        let sub = data.subtopic("must-know-terms", "tcp-vs-udp").unwrap();
        assert_eq!(sub.title, "TCP vs UDP");

        // ids are scoped to their topic
        assert!(data.subtopic("aws", "tcp-vs-udp").is_none());
    }

    #[test]
    fn test_by_key() {
        let data = sample();
        let key = ContentKey::for_subtopic("aws", "aws-core-services");
        let (topic, sub) = data.by_key(key).unwrap();
        assert_eq!(topic.id, "aws");
        assert_eq!(sub.id, "aws-core-services");
    }

    #[test]
    fn test_resolve() {
        let data = sample();
        let (topic, sub) = data.resolve("must-know-terms/cap-theorem").unwrap();
        assert_eq!(topic.id, "must-know-terms");
        assert_eq!(sub.title, "CAP Theorem");

        assert!(matches!(
            data.resolve("gcp/compute"),
            Err(CatalogError::UnknownTopic(t)) if t == "gcp"
        ));
        assert!(matches!(
            data.resolve("aws/lambda"),
            Err(CatalogError::UnknownSubtopic { topic, id }) if topic == "aws" && id == "lambda"
        ));
        assert!(matches!(data.resolve("aws"), Err(CatalogError::InvalidPath(_))));
    }

    #[test]
    fn test_subtopics_by_category() {
        let data = sample();
        let distributed = data.subtopics_by_category(Category::DistributedSystemsTheory);
        let titles: Vec<_> = distributed.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["CAP Theorem", "Vector Clocks"]);
        assert!(data.subtopics_by_category(Category::DevOpsAndInfrastructure).is_empty());
    }

    #[test]
    fn test_category_counts() {
        let counts = sample().category_counts();
        assert_eq!(counts.get(&Category::DistributedSystemsTheory), Some(&2));
        assert_eq!(counts.get(&Category::NetworkingAndProtocols), Some(&1));
        assert_eq!(counts.get(&Category::DatabaseFundamentals), None);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let data = AppData::from_topics(vec![Topic::new("t", "T")
            .with_subtopic(Subtopic::new("dup", "First", "1"))
            .with_subtopic(Subtopic::new("dup", "Second", "2"))]);

        assert_eq!(data.subtopic_count(), 2);
        assert_eq!(data.subtopic("t", "dup").unwrap().title, "First");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let topics = json["topics"].as_array().unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0]["id"], "must-know-terms");
        assert_eq!(topics[0]["subtopics"][0]["category"], "Distributed Systems Theory");
        assert!(topics[1]["subtopics"][0].get("category").is_none());
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_deserialize_rebuilds_index() {
        let json = serde_json::to_string(&sample()).unwrap();
        let decoded: AppData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, sample());
        assert!(decoded.subtopic("must-know-terms", "vector-clocks").is_some());
    }

    #[test]
    fn test_slash_in_ids_stays_in_its_topic() {
        let data = AppData::from_topics(vec![
            Topic::new("a/b", "AB").with_subtopic(Subtopic::new("c", "From a/b", "1")),
            Topic::new("a", "A").with_subtopic(Subtopic::new("b/c", "From a", "2")),
        ]);

        assert_eq!(data.subtopic("a", "b/c").unwrap().title, "From a");
        assert_eq!(data.subtopic("a/b", "c").unwrap().title, "From a/b");

        let (topic, sub) = data.by_key(ContentKey::for_subtopic("a", "b/c")).unwrap();
        assert_eq!((topic.id.as_str(), sub.title.as_str()), ("a", "From a"));
    }
}
