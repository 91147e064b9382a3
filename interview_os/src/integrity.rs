//! Integrity checks over an assembled catalog.
//!
//! Nothing here mutates or rejects data; the report describes what a
//! consumer indexing by id or relying on ordering would trip over.

use std::collections::HashMap;

use crate::aggregator::locale_compare;
use crate::catalog::AppData;

/// Subtopic field that was found blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Content,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

/// A subtopic id that occurs more than once inside one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub topic: String,
    pub id: String,
    pub occurrences: usize,
}

/// A blank field, located by topic and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyField {
    pub topic: String,
    pub position: usize,
    pub field: Field,
}

/// A subtopic without a category in a topic whose other subtopics carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCategory {
    pub topic: String,
    pub subtopic: String,
}

/// Adjacent titles out of order in a sorted topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    pub topic: String,
    pub before: String,
    pub after: String,
}

/// Everything found by [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub duplicate_topic_ids: Vec<String>,
    pub duplicate_subtopic_ids: Vec<DuplicateId>,
    pub empty_fields: Vec<EmptyField>,
    pub missing_categories: Vec<MissingCategory>,
    pub order_violations: Vec<OrderViolation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_topic_ids.is_empty()
            && self.duplicate_subtopic_ids.is_empty()
            && self.empty_fields.is_empty()
            && self.missing_categories.is_empty()
            && self.order_violations.is_empty()
    }

    /// One human-readable line per finding.
    pub fn issues(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for id in &self.duplicate_topic_ids {
            lines.push(format!("topic id `{id}` is used more than once"));
        }
        for dup in &self.duplicate_subtopic_ids {
            lines.push(format!(
                "subtopic id `{}` appears {} times in topic `{}`",
                dup.id, dup.occurrences, dup.topic
            ));
        }
        for empty in &self.empty_fields {
            lines.push(format!(
                "subtopic #{} in topic `{}` has an empty {}",
                empty.position,
                empty.topic,
                empty.field.name()
            ));
        }
        for missing in &self.missing_categories {
            lines.push(format!(
                "subtopic `{}` in topic `{}` has no category",
                missing.subtopic, missing.topic
            ));
        }
        for violation in &self.order_violations {
            lines.push(format!(
                "topic `{}` is not sorted: `{}` comes before `{}`",
                violation.topic, violation.before, violation.after
            ));
        }

        lines
    }
}

/// Inspect a catalog. `sorted_topics` names the topics expected to be in
/// title order.
pub fn check(data: &AppData, sorted_topics: &[String]) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    report.duplicate_topic_ids = duplicates(data.topics().iter().map(|t| t.id.as_str()))
        .into_iter()
        .map(|(id, _)| id.to_string())
        .collect();

    for topic in data.topics() {
        for (id, occurrences) in duplicates(topic.subtopics.iter().map(|s| s.id.as_str())) {
            report.duplicate_subtopic_ids.push(DuplicateId {
                topic: topic.id.clone(),
                id: id.to_string(),
                occurrences,
            });
        }

        for (position, sub) in topic.subtopics.iter().enumerate() {
            let blanks = [
                (Field::Id, &sub.id),
                (Field::Title, &sub.title),
                (Field::Content, &sub.content),
            ];
            for (field, value) in blanks {
                if value.trim().is_empty() {
                    report.empty_fields.push(EmptyField {
                        topic: topic.id.clone(),
                        position,
                        field,
                    });
                }
            }
        }

        let categorised = topic.subtopics.iter().any(|s| s.category.is_some());
        if categorised {
            for sub in topic.subtopics.iter().filter(|s| s.category.is_none()) {
                report.missing_categories.push(MissingCategory {
                    topic: topic.id.clone(),
                    subtopic: sub.id.clone(),
                });
            }
        }

        if sorted_topics.iter().any(|id| *id == topic.id) {
            for pair in topic.subtopics.windows(2) {
                if locale_compare(&pair[0].title, &pair[1].title).is_gt() {
                    report.order_violations.push(OrderViolation {
                        topic: topic.id.clone(),
                        before: pair[0].title.clone(),
                        after: pair[1].title.clone(),
                    });
                }
            }
        }
    }

    report
}

/// Values seen more than once, in order of first appearance, with counts.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for value in values {
        let count = counts.entry(value).or_default();
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|value| match counts[value] {
            n if n > 1 => Some((value, n)),
            _ => None,
        })
        .collect()
}
