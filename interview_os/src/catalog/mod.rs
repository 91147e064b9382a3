//! Catalog model - what the presentation layer consumes.
//!
//! - **Topics**: top-level navigation groups
//! - **Subtopics**: individual articles inside a topic
//! - **Categories**: thematic labels inside the must-know terms topic
//! - **Keys**: stable content addresses for lookup and routing

mod app_data;
mod category;
mod key;
mod subtopic;
mod topic;

pub use app_data::*;
pub use category::*;
pub use key::*;
pub use subtopic::*;
pub use topic::*;
