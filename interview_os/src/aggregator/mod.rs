//! Aggregator - assembles the content library into the served catalog.
//!
//! Assembly works as follows:
//! 1. **Copy**: every library record referenced by the layout becomes a subtopic
//! 2. **Tag**: records in categorised topics receive their category
//! 3. **Flatten**: category groups are concatenated into one sequence
//! 4. **Sort**: configured topics are ordered by title, locale-aware and stable
//! 5. **Assemble**: topics are emitted in layout order

mod collation;
mod manifest;

pub use collation::*;
pub use manifest::*;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{AppData, Subtopic, Topic};
use crate::error::{CatalogError, Result};
use crate::integrity;

/// Configuration for catalog assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorConfig {
    /// Topics whose subtopics are sorted by title. All others keep layout order.
    pub sorted_topics: Vec<String>,

    /// Reject duplicate ids instead of only reporting them.
    pub strict_ids: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            sorted_topics: vec![MUST_KNOW_TERMS.to_string()],
            strict_ids: false,
        }
    }
}

/// Builds [`AppData`] from a layout.
pub struct Aggregator {
    config: AggregatorConfig,
    layout: &'static [TopicLayout],
}

impl Aggregator {
    /// Create an aggregator over the built-in layout.
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            layout: LAYOUT,
        }
    }

    /// Create an aggregator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AggregatorConfig::default())
    }

    /// Replace the layout.
    pub fn with_layout(mut self, layout: &'static [TopicLayout]) -> Self {
        self.layout = layout;
        self
    }

    /// Assemble the catalog. Pure and deterministic; never fails.
    pub fn assemble(&self) -> AppData {
        let topics: Vec<Topic> = self.layout.iter().map(|entry| self.build_topic(entry)).collect();
        let data = AppData::from_topics(topics);

        debug!(
            "assembled catalog: {} topics, {} subtopics",
            data.topic_count(),
            data.subtopic_count()
        );

        data
    }

    /// Assemble the catalog and run integrity checks.
    ///
    /// Findings are always logged. With `strict_ids` set, duplicate topic or
    /// subtopic ids are returned as errors.
    pub fn build(&self) -> Result<AppData> {
        let data = self.assemble();
        let report = integrity::check(&data, &self.config.sorted_topics);

        for issue in report.issues() {
            warn!("catalog integrity: {}", issue);
        }

        if self.config.strict_ids {
            if let Some(id) = report.duplicate_topic_ids.first() {
                return Err(CatalogError::DuplicateTopic(id.clone()));
            }
            if let Some(dup) = report.duplicate_subtopic_ids.first() {
                return Err(CatalogError::DuplicateId {
                    topic: dup.topic.clone(),
                    id: dup.id.clone(),
                });
            }
        }

        Ok(data)
    }

    fn build_topic(&self, entry: &TopicLayout) -> Topic {
        let mut subtopics: Vec<Subtopic> = match entry.source {
            TopicSource::Plain(records) => records.iter().map(Subtopic::from_content).collect(),
            TopicSource::Categorised(groups) => groups
                .iter()
                .flat_map(|(category, records)| {
                    records
                        .iter()
                        .map(move |record| Subtopic::from_content(record).with_category(*category))
                })
                .collect(),
        };

        if self.config.sorted_topics.iter().any(|id| id == entry.id) {
            sort_by_title(&mut subtopics);
        }

        Topic::new(entry.id, entry.title).with_subtopics(subtopics)
    }
}

/// Sort subtopics by title using locale-aware comparison. Stable.
pub fn sort_by_title(subtopics: &mut [Subtopic]) {
    subtopics.sort_by(|a, b| locale_compare(&a.title, &b.title));
}

/// Assemble the catalog with default configuration.
pub fn build_app_data() -> AppData {
    Aggregator::with_defaults().assemble()
}

static APP_DATA: Lazy<AppData> = Lazy::new(build_app_data);

/// The process-wide catalog, assembled on first use.
pub fn app_data() -> &'static AppData {
    &APP_DATA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use topic_content::TopicContent;

    const ZETA: TopicContent = TopicContent::new("zeta", "Zeta", "<p>z</p>");
    const ALPHA: TopicContent = TopicContent::new("alpha", "alpha", "<p>a</p>");
    const BETA: TopicContent = TopicContent::new("beta", "Beta", "<p>b</p>");
    const BETA_AGAIN: TopicContent = TopicContent::new("beta", "Beta", "<p>b2</p>");

    const TEST_LAYOUT: &[TopicLayout] = &[
        TopicLayout {
            id: "plain",
            title: "Plain",
            source: TopicSource::Plain(&[ZETA, ALPHA]),
        },
        TopicLayout {
            id: MUST_KNOW_TERMS,
            title: "Must know Terms",
            source: TopicSource::Categorised(&[
                (Category::PerformanceAndReliability, &[ZETA]),
                (Category::DatabaseFundamentals, &[BETA, ALPHA]),
            ]),
        },
    ];

    const DUPLICATE_LAYOUT: &[TopicLayout] = &[TopicLayout {
        id: "dups",
        title: "Dups",
        source: TopicSource::Plain(&[BETA, BETA_AGAIN]),
    }];

    fn titles(topic: &Topic) -> Vec<&str> {
        topic.subtopics.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_plain_topic_keeps_order() {
        let data = Aggregator::with_defaults().with_layout(TEST_LAYOUT).assemble();
        assert_eq!(titles(data.topic("plain").unwrap()), ["Zeta", "alpha"]);
        assert!(data.topic("plain").unwrap().subtopics.iter().all(|s| s.category.is_none()));
    }

    #[test]
    fn test_categorised_topic_is_tagged_and_sorted() {
        let data = Aggregator::with_defaults().with_layout(TEST_LAYOUT).assemble();
        let terms = data.topic(MUST_KNOW_TERMS).unwrap();

        assert_eq!(titles(terms), ["alpha", "Beta", "Zeta"]);
        assert_eq!(terms.subtopics[0].category, Some(Category::DatabaseFundamentals));
        assert_eq!(terms.subtopics[2].category, Some(Category::PerformanceAndReliability));
    }

    #[test]
    fn test_sorted_topics_is_configurable() {
        let config = AggregatorConfig {
            sorted_topics: vec!["plain".to_string()],
            strict_ids: false,
        };
        let data = Aggregator::new(config).with_layout(TEST_LAYOUT).assemble();

        assert_eq!(titles(data.topic("plain").unwrap()), ["alpha", "Zeta"]);
        assert_eq!(titles(data.topic(MUST_KNOW_TERMS).unwrap()), ["Zeta", "Beta", "alpha"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut subs = vec![
            Subtopic::new("first", "Same", "1"),
            Subtopic::new("second", "Same", "2"),
            Subtopic::new("early", "Early", "0"),
        ];
        sort_by_title(&mut subs);
        let ids: Vec<_> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["early", "first", "second"]);
    }

    #[test]
    fn test_build_tolerates_duplicates_by_default() {
        let data = Aggregator::with_defaults()
            .with_layout(DUPLICATE_LAYOUT)
            .build()
            .unwrap();
        assert_eq!(data.topic("dups").unwrap().len(), 2);
    }

    #[test]
    fn test_build_strict_rejects_duplicates() {
        let config = AggregatorConfig {
            strict_ids: true,
            ..AggregatorConfig::default()
        };
        let result = Aggregator::new(config).with_layout(DUPLICATE_LAYOUT).build();
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { topic, id }) if topic == "dups" && id == "beta"
        ));
    }

    #[test]
    fn test_build_strict_accepts_builtin_layout() {
        let config = AggregatorConfig {
            strict_ids: true,
            ..AggregatorConfig::default()
        };
        assert!(Aggregator::new(config).build().is_ok());
    }

    #[test]
    fn test_app_data_is_memoised() {
        let a = app_data();
        let b = app_data();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, build_app_data());
    }
}
