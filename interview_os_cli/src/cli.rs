//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse, check and export the Interview OS catalog.
#[derive(Parser, Debug)]
#[command(name = "technotes", author, version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Settings file; `technotes.toml` in the working directory is used when present
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List topics with their subtopic counts
    Topics,
    /// List a topic's subtopics, or print one article
    Show {
        /// Topic id, or a `topic/subtopic` content path
        topic: String,
        /// Subtopic id
        subtopic: Option<String>,
    },
    /// Count must-know terms per category
    Categories,
    /// Write the catalog as JSON (stdout by default)
    Export {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Report integrity problems; non-zero exit if any
    Check,
}

impl Command {
    /// Normalise `show a/b` into `show a b`. Other commands are returned as-is.
    pub fn normalized(self) -> Self {
        match self {
            Command::Show {
                topic,
                subtopic: None,
            } => match topic.split_once('/') {
                Some((topic, subtopic)) => Command::Show {
                    topic: topic.to_string(),
                    subtopic: Some(subtopic.to_string()),
                },
                None => Command::Show {
                    topic,
                    subtopic: None,
                },
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("technotes").chain(args.iter().copied()))
    }

    fn command(args: &[&str]) -> Command {
        parse(args).unwrap().command.normalized()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_empty_args_show_help() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(command(&["topics"]), Command::Topics);
        assert_eq!(command(&["categories"]), Command::Categories);
        assert_eq!(command(&["check"]), Command::Check);
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = parse(&["topics", "--config", "my.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));

        let cli = parse(&["-c", "other.toml", "check"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert_eq!(cli.command, Command::Check);

        assert_eq!(parse(&["check"]).unwrap().config, None);
    }

    #[test]
    fn test_show_forms() {
        assert_eq!(
            command(&["show", "aws"]),
            Command::Show {
                topic: "aws".to_string(),
                subtopic: None
            }
        );
        let expected = Command::Show {
            topic: "must-know-terms".to_string(),
            subtopic: Some("cap-theorem".to_string()),
        };
        assert_eq!(command(&["show", "must-know-terms", "cap-theorem"]), expected);
        assert_eq!(command(&["show", "must-know-terms/cap-theorem"]), expected);
    }

    #[test]
    fn test_export_flags() {
        assert_eq!(
            command(&["export", "--pretty", "--out", "catalog.json"]),
            Command::Export {
                pretty: true,
                out: Some(PathBuf::from("catalog.json"))
            }
        );
        assert_eq!(
            command(&["export", "-o", "c.json", "--config", "t.toml"]),
            Command::Export {
                pretty: false,
                out: Some(PathBuf::from("c.json"))
            }
        );
        assert_eq!(
            command(&["export"]),
            Command::Export {
                pretty: false,
                out: None
            }
        );
    }

    #[test]
    fn test_usage_errors() {
        let kind = |args: &[&str]| parse(args).unwrap_err().kind();
        assert_eq!(kind(&["frobnicate"]), ErrorKind::InvalidSubcommand);
        assert_eq!(kind(&["topics", "extra"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["show"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["show", "a", "b", "c"]), ErrorKind::UnknownArgument);
        assert!(parse(&["check", "--config"]).is_err());
        assert_eq!(kind(&["topics", "--verbose"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["topics", "--pretty"]), ErrorKind::UnknownArgument);
    }
}
