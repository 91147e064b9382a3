//! # Topic Content
//!
//! The content library behind TechNotes Interview OS. Every reference article
//! is a compile-time constant of [`TopicContent`]; this crate holds no logic
//! beyond grouping those constants so the aggregator can wire them into the
//! catalog.
//!
//! Article bodies are pre-authored HTML and are never parsed here.

pub mod content;

pub use content::*;
