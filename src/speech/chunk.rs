//! Request chunking.
//!
//! The provider rejects long `q` values, so input is split into pieces of at
//! most [`MAX_CHUNK_CHARS`] characters. Breaks land after sentence
//! punctuation when possible, otherwise at whitespace; a hard cut is the
//! last resort. Chunk boundaries count characters, not bytes.

/// Largest chunk the provider accepts per request.
pub(crate) const MAX_CHUNK_CHARS: usize = 100;

/// Split `text` into non-empty chunks of at most `max_chars` characters.
///
/// Whitespace at chunk boundaries is dropped. Whitespace-only input yields
/// no chunks at all.
pub(crate) fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
        if start >= chars.len() {
            break;
        }

        if chars.len() - start <= max_chars {
            push_chunk(&mut chunks, &chars[start..]);
            break;
        }

        let cut = find_break(&chars, start, start + max_chars);
        push_chunk(&mut chunks, &chars[start..cut]);
        start = cut;
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, piece: &[char]) {
    let chunk: String = piece.iter().collect();
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_string());
    }
}

/// Best cut position in `[start, window_end)`: after the last sentence
/// punctuation, else at the last whitespace, else `window_end` itself.
fn find_break(chars: &[char], start: usize, window_end: usize) -> usize {
    for i in (start..window_end).rev() {
        if matches!(chars[i], '.' | '!' | '?' | ';' | ':' | ',') {
            return i + 1;
        }
    }
    for i in (start..window_end).rev() {
        if chars[i].is_whitespace() {
            return i;
        }
    }
    window_end
}
