//! Rough before/after measurements for reporting.

use crate::params::HP;
use crate::segment::segment;
use crate::text::strip_punct;

/// How much of `original` changed in `processed`, in [0, cap].
///
/// Counts words that differ position by position (case and punctuation
/// ignored), adds a weighted penalty for every sentence gained or lost, and
/// divides by the longer word count. Identical texts give 0.
pub fn change_ratio(original: &str, processed: &str) -> f64 {
    let before: Vec<String> = original.split_whitespace().map(normalize_word).collect();
    let after: Vec<String> = processed.split_whitespace().map(normalize_word).collect();
    let longest = before.len().max(after.len());
    if longest == 0 {
        return 0.0;
    }

    let differing = (0..longest)
        .filter(|&i| before.get(i) != after.get(i))
        .count();
    let sentence_delta = segment(original).len().abs_diff(segment(processed).len());
    let raw = (differing as f64 + HP.sentence_delta_weight * sentence_delta as f64) / longest as f64;
    raw.min(HP.change_ratio_cap)
}

fn normalize_word(word: &str) -> String {
    strip_punct(word).to_lowercase()
}
