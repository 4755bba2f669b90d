use crate::error::{AppError, AppResult};

/// Split text into chunks of at most `limit` Unicode scalar values.
///
/// Full `limit`-sized chunks are emitted while at least `limit` characters
/// remain; whatever is left becomes the final chunk. The result therefore always has
/// `len / limit + 1` elements and ends with an empty chunk when the length is
/// an exact multiple of `limit` (including empty input).
pub fn chunk(text: &str, limit: usize) -> AppResult<Vec<String>> {
    if limit == 0 {
        return Err(AppError::Validation(
            "chunk limit must be greater than zero".to_string(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut remaining = chars.as_slice();
    let mut chunks = Vec::with_capacity(remaining.len() / limit + 1);

    while remaining.len() >= limit {
        let (head, tail) = remaining.split_at(limit);
        chunks.push(head.iter().collect());
        remaining = tail;
    }
    chunks.push(remaining.iter().collect());

    Ok(chunks)
}
