//! Labeled permission statements attached to a topic.
//!
//! Statements are stored and returned verbatim; nothing evaluates them.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatement {
    pub label: String,
    pub principals: Vec<String>,
    pub actions: Vec<String>,
}
