//! # Interview OS
//!
//! Assembles the TechNotes content library into the catalog the reference
//! application renders: a list of topics, each holding ordered subtopics.
//!
//! ## Core Components
//!
//! - **catalog**: topics, subtopics, categories and stable content keys
//! - **aggregator**: builds the catalog from the library layout
//! - **integrity**: reports duplicate ids, blank fields and ordering faults
//! - **export**: JSON in the shape the presentation layer consumes
//! - **config**: TOML settings
//!
//! The catalog is immutable once built. [`app_data`] hands out a lazily built,
//! process-wide instance.

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod integrity;

pub use aggregator::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use integrity::{check, IntegrityReport};
pub use topic_content::TopicContent;
