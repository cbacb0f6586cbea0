//! Clause segmentation for raw contract text

use clausewise_domain::Clause;

/// Splits raw document text into an ordered sequence of clauses
///
/// Blocks (blank-line paragraphs) are the coarsest unit; blocks are split
/// further on semicolons and single newlines, then on sentence boundaries.
/// Output order equals source order.
pub struct Segmenter {
    dedup_min_len: usize,
}

impl Segmenter {
    /// Create a segmenter with the given deduplication length threshold
    pub fn new(dedup_min_len: usize) -> Self {
        Self { dedup_min_len }
    }

    /// Segment raw text into clauses
    ///
    /// Empty input (after trimming) yields an empty sequence. A document
    /// with no blank lines degrades to a single block, still subject to
    /// newline and sentence splitting.
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        let text = text.replace("\r\n", "\n");

        let mut fragments: Vec<&str> = Vec::new();
        for block in text.split("\n\n") {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            for part in block.split(|c| c == ';' || c == '\n') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                for sentence in split_sentences(part) {
                    let sentence = sentence.trim();
                    if !sentence.is_empty() {
                        fragments.push(sentence);
                    }
                }
            }
        }

        // Deduplicate near-adjacent repeats: a fragment is dropped only when
        // it exceeds the length threshold AND equals one of the two
        // immediately preceding kept fragments. Short fragments are always
        // kept (numbered headers repeat legitimately).
        let mut kept: Vec<&str> = Vec::new();
        for fragment in fragments {
            let is_repeat = fragment.chars().count() > self.dedup_min_len
                && kept.iter().rev().take(2).any(|k| *k == fragment);
            if !is_repeat {
                kept.push(fragment);
            }
        }

        kept.into_iter().filter_map(Clause::new).collect()
    }
}

/// Split a segment at sentence boundaries.
///
/// A position is a boundary when preceded by `.`, `?`, `!`, or `;` and
/// followed by whitespace and then an ASCII uppercase letter or digit. This
/// avoids splitting on abbreviations followed by lowercase continuations.
fn split_sentences(segment: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in segment.char_indices() {
        if !matches!(ch, '.' | '?' | '!' | ';') {
            continue;
        }
        let after_punct = idx + ch.len_utf8();
        if after_punct <= start {
            continue;
        }
        let rest = &segment[after_punct..];
        let ws_len: usize = rest
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| c.len_utf8())
            .sum();
        if ws_len == 0 {
            continue;
        }
        if let Some(next) = rest[ws_len..].chars().next() {
            if next.is_ascii_uppercase() || next.is_ascii_digit() {
                sentences.push(&segment[start..after_punct]);
                start = after_punct + ws_len;
            }
        }
    }

    if start < segment.len() {
        sentences.push(&segment[start..]);
    }
    sentences
}
