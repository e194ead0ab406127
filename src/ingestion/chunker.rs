//! Content Chunker
//!
//! The placeholder transform run by the default processors: slices content into
//! fixed-size character chunks.

use crate::storage::types::ProcessingResult;

/// Number of characters per chunk. The last chunk may be shorter.
pub const CHUNK_SIZE: usize = 200;

/// Splits `content` into consecutive chunks of `chunk_size` characters.
///
/// Sizes are counted in `char`s, so multi-byte characters are never split.
/// Empty content yields no chunks, and concatenating the chunks reproduces
/// `content` exactly.
pub fn split_into_chunks(content: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(content.len() / chunk_size + 1);
    let mut start = 0;

    for (count, (idx, _)) in content.char_indices().enumerate() {
        if count > 0 && count % chunk_size == 0 {
            chunks.push(content[start..idx].to_string());
            start = idx;
        }
    }

    if start < content.len() {
        chunks.push(content[start..].to_string());
    }

    chunks
}

/// Chunks `content` with [`CHUNK_SIZE`] and counts its characters.
pub fn chunk_content(content: &str) -> ProcessingResult {
    ProcessingResult {
        chunks: split_into_chunks(content, CHUNK_SIZE),
        char_count: content.chars().count(),
    }
}
