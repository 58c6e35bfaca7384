//! Topic name validation.
//!
//! Names are 1..=256 characters drawn from ASCII letters, digits, `-`, and `_`.
//! Validation runs before an identifier is built or the registry is touched.
use thiserror::Error;

pub const MAX_TOPIC_NAME_LEN: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTopicName {
    #[error("topic name is empty")]
    Empty,
    #[error("topic name is {0} characters, limit is {MAX_TOPIC_NAME_LEN}")]
    TooLong(usize),
    #[error("topic name contains disallowed character {0:?}")]
    DisallowedCharacter(char),
}

pub fn validate_topic_name(name: &str) -> Result<(), InvalidTopicName> {
    if name.is_empty() {
        return Err(InvalidTopicName::Empty);
    }
    let len = name.chars().count();
    if len > MAX_TOPIC_NAME_LEN {
        return Err(InvalidTopicName::TooLong(len));
    }
    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        Some(c) => Err(InvalidTopicName::DisallowedCharacter(c)),
        None => Ok(()),
    }
}
