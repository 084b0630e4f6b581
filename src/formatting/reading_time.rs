// src/formatting/reading_time.rs
//! Reading-time estimation over a post's content blocks.

use crate::constants::READING_SPEED_WORDS_PER_MINUTE;
use crate::model::ContentBlock;

/// Estimate the reading time of a post as `"<N> min"`.
///
/// Counts whitespace-delimited words across ALL content blocks summed
/// together, divides by the fixed reading speed, and rounds UP to the
/// nearest whole minute; a one-word post still reports `"1 min"`.
/// Content with no words reports `"0 min"`, matching the original site.
/// Deterministic and side-effect-free.
pub fn estimate_reading_time(content: &[ContentBlock]) -> String {
    let total_words: usize = content.iter().map(|block| block.body.word_count()).sum();
    let minutes = total_words.div_ceil(READING_SPEED_WORDS_PER_MINUTE);
    format!("{} min", minutes)
}
