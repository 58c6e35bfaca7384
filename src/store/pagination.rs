//! Continuation token codec for paginated listings.
//!
//! A token is the decimal zero-based index of the first item not yet returned.
//! Callers must treat it as opaque; only `encode_next_token` and
//! `decode_next_token` know the representation.
use crate::store::{StoreError, StoreResult};

pub fn encode_next_token(index: usize) -> String {
    index.to_string()
}

pub fn decode_next_token(token: &str) -> StoreResult<usize> {
    token
        .parse::<usize>()
        .map_err(|_| StoreError::InvalidNextToken(token.to_string()))
}

/// Slices one page out of `items`, starting where `next_token` points.
///
/// A token equal to `items.len()` yields an empty final page; a token past the
/// end is rejected.
pub fn paginate<T: Clone>(
    items: &[T],
    next_token: Option<&str>,
    page_size: usize,
) -> StoreResult<(Vec<T>, Option<String>)> {
    let start = match next_token {
        Some(token) => decode_next_token(token)?,
        None => 0,
    };
    if start > items.len() {
        return Err(StoreError::InvalidNextToken(encode_next_token(start)));
    }
    let end = start.saturating_add(page_size).min(items.len());
    let next = (end < items.len()).then(|| encode_next_token(end));
    Ok((items[start..end].to_vec(), next))
}
