//! Command execution against an assembled catalog.

use std::io::Write;

use interview_os::export::{to_json, write_json};
use interview_os::{check, Aggregator, AppData, CatalogError, Category, ContentKey, Settings};
use log::info;

use crate::cli::Command;
use crate::error::CliError;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found problems.
    IssuesFound,
}

/// Assemble the catalog a command runs against.
///
/// `check` reports problems rather than failing on them, so it skips the
/// strict-mode rejection that every other command goes through.
pub fn catalog_for(command: &Command, aggregator: &Aggregator) -> Result<AppData, CatalogError> {
    match command {
        Command::Check => Ok(aggregator.assemble()),
        _ => aggregator.build(),
    }
}

pub fn execute<W: Write>(
    command: &Command,
    data: &AppData,
    settings: &Settings,
    out: &mut W,
) -> Result<Outcome, CliError> {
    match command {
        Command::Topics => list_topics(data, out)?,
        Command::Show { topic, subtopic } => show(data, topic, subtopic.as_deref(), out)?,
        Command::Categories => list_categories(data, out)?,
        Command::Export { pretty, out: path } => {
            let pretty = *pretty || settings.output.pretty;
            match path {
                Some(path) => {
                    write_json(data, path, pretty)?;
                    info!("wrote catalog to {}", path.display());
                }
                None => writeln!(out, "{}", to_json(data, pretty)?)?,
            }
        }
        Command::Check => return run_check(data, settings, out),
    }
    Ok(Outcome::Success)
}

fn list_topics<W: Write>(data: &AppData, out: &mut W) -> Result<(), CliError> {
    for topic in data.topics() {
        writeln!(out, "{:<24} {:>3}  {}", topic.id, topic.len(), topic.title)?;
    }
    Ok(())
}

fn show<W: Write>(
    data: &AppData,
    topic_id: &str,
    subtopic_id: Option<&str>,
    out: &mut W,
) -> Result<(), CliError> {
    let topic = data
        .topic(topic_id)
        .ok_or_else(|| CatalogError::UnknownTopic(topic_id.to_string()))?;

    let Some(subtopic_id) = subtopic_id else {
        writeln!(out, "{} ({})", topic.title, topic.id)?;
        for sub in &topic.subtopics {
            match sub.category {
                Some(category) => writeln!(out, "  {:<36} {}  [{}]", sub.id, sub.title, category)?,
                None => writeln!(out, "  {:<36} {}", sub.id, sub.title)?,
            }
        }
        return Ok(());
    };

    let sub = topic
        .subtopic(subtopic_id)
        .ok_or_else(|| CatalogError::UnknownSubtopic {
            topic: topic.id.clone(),
            id: subtopic_id.to_string(),
        })?;

    writeln!(out, "{}", sub.title)?;
    if let Some(category) = sub.category {
        writeln!(out, "category: {category}")?;
    }
    writeln!(out, "key: {}", ContentKey::for_subtopic(&topic.id, &sub.id))?;
    writeln!(out)?;
    writeln!(out, "{}", sub.content)?;
    Ok(())
}

fn list_categories<W: Write>(data: &AppData, out: &mut W) -> Result<(), CliError> {
    let counts = data.category_counts();
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        writeln!(out, "{:<36} {:>3}", category.label(), count)?;
    }
    Ok(())
}

fn run_check<W: Write>(data: &AppData, settings: &Settings, out: &mut W) -> Result<Outcome, CliError> {
    let report = check(data, &settings.aggregator.sorted_topics);
    if report.is_clean() {
        writeln!(
            out,
            "ok: {} topics, {} subtopics",
            data.topic_count(),
            data.subtopic_count()
        )?;
        return Ok(Outcome::Success);
    }

    for issue in report.issues() {
        writeln!(out, "{issue}")?;
    }
    Ok(Outcome::IssuesFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_os::{
        build_app_data, AggregatorConfig, Subtopic, Topic, TopicContent, TopicLayout, TopicSource,
    };

    static REPEATED: &[TopicContent] = &[
        TopicContent::new("x", "One", "<p>1</p>"),
        TopicContent::new("x", "Two", "<p>2</p>"),
    ];

    static REPEATED_LAYOUT: &[TopicLayout] = &[TopicLayout {
        id: "t",
        title: "T",
        source: TopicSource::Plain(REPEATED),
    }];

    fn strict_aggregator() -> Aggregator {
        let config = AggregatorConfig {
            strict_ids: true,
            ..AggregatorConfig::default()
        };
        Aggregator::new(config).with_layout(REPEATED_LAYOUT)
    }

    fn run(command: Command, data: &AppData) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = execute(&command, data, &Settings::default(), &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_topics_lists_every_topic() {
        let data = build_app_data();
        let (_, text) = run(Command::Topics, &data);
        assert_eq!(text.lines().count(), data.topic_count());
        assert!(text.lines().next().unwrap().starts_with("acronyms"));
    }

    #[test]
    fn test_show_prints_article() {
        let data = build_app_data();
        let (_, text) = run(
            Command::Show {
                topic: "must-know-terms".to_string(),
                subtopic: Some("tcp-vs-udp".to_string()),
            },
            &data,
        );
        assert!(text.starts_with("TCP vs UDP\ncategory: Networking & Protocols\nkey: "));
        assert!(text.contains("head-of-line blocking"));
    }

    #[test]
    fn test_show_lists_topic() {
        let data = build_app_data();
        let (_, text) = run(
            Command::Show {
                topic: "acronyms".to_string(),
                subtopic: None,
            },
            &data,
        );
        assert!(text.starts_with("Acronyms (acronyms)\n"));
        assert!(text.contains("database-acronyms"));
    }

    #[test]
    fn test_show_unknown_topic_fails() {
        let data = build_app_data();
        let mut buf = Vec::new();
        let err = execute(
            &Command::Show {
                topic: "cobol".to_string(),
                subtopic: None,
            },
            &data,
            &Settings::default(),
            &mut buf,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Catalog(CatalogError::UnknownTopic(t)) if t == "cobol"));
    }

    #[test]
    fn test_categories_lists_all_eight() {
        let (_, text) = run(Command::Categories, &build_app_data());
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("Security & Authentication"));
    }

    #[test]
    fn test_export_to_stdout_is_json() {
        let data = build_app_data();
        let (_, text) = run(
            Command::Export {
                pretty: false,
                out: None,
            },
            &data,
        );
        let decoded = interview_os::export::from_json(text.trim_end()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_check_reports_clean_catalog() {
        let (outcome, text) = run(Command::Check, &build_app_data());
        assert_eq!(outcome, Outcome::Success);
        assert!(text.starts_with("ok: "));
    }

    #[test]
    fn test_check_reports_duplicates() {
        let data = AppData::from_topics(vec![Topic::new("t", "T")
            .with_subtopic(Subtopic::new("x", "One", "1"))
            .with_subtopic(Subtopic::new("x", "Two", "2"))]);
        let (outcome, text) = run(Command::Check, &data);
        assert_eq!(outcome, Outcome::IssuesFound);
        assert!(text.contains("subtopic id `x` appears 2 times in topic `t`"));
    }

    #[test]
    fn test_check_lists_issues_in_strict_mode() {
        let aggregator = strict_aggregator();
        let data = catalog_for(&Command::Check, &aggregator).unwrap();
        let (outcome, text) = run(Command::Check, &data);
        assert_eq!(outcome, Outcome::IssuesFound);
        assert!(text.contains("subtopic id `x` appears 2 times in topic `t`"));
    }

    #[test]
    fn test_other_commands_fail_in_strict_mode() {
        let aggregator = strict_aggregator();
        let err = catalog_for(&Command::Topics, &aggregator).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { topic, id } if topic == "t" && id == "x"));
    }
}
