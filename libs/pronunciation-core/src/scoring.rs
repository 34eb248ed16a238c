//! Pronunciation accuracy scoring.

use crate::feedback::{generate_feedback_in, FeedbackLocale};
use serde::{Deserialize, Serialize};

/// Result of comparing a recognized utterance to the target word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Similarity score between 0 and 100.
    pub accuracy: u8,
    /// Feedback message for the learner.
    pub feedback: String,
    /// Recognized transcript as passed in (for display).
    pub recognized_word: String,
    /// Target word as passed in (for display).
    pub target_word: String,
}

/// Score an attempt and attach default-locale feedback.
pub fn analyze(target: &str, recognized: &str) -> AnalysisResult {
    analyze_in(target, recognized, FeedbackLocale::default())
}

/// Score an attempt and attach feedback rendered in `locale`.
pub fn analyze_in(target: &str, recognized: &str, locale: FeedbackLocale) -> AnalysisResult {
    let accuracy = compute_accuracy(target, recognized);
    let feedback = generate_feedback_in(target, recognized, accuracy, locale);

    AnalysisResult {
        accuracy,
        feedback,
        recognized_word: recognized.to_string(),
        target_word: target.to_string(),
    }
}

/// Trim edge whitespace and lower-case.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Accuracy (0-100) of `recognized` against `target`.
///
/// Empty input on either side scores 0, identical input scores 100.
/// Otherwise `round((1 - distance / max_len) * 100)` with `max_len` the
/// char count of the longer string, capped at 99 so that only identical
/// words reach 100.
pub fn compute_accuracy(target: &str, recognized: &str) -> u8 {
    let target = normalize(target);
    let recognized = normalize(recognized);

    if target.is_empty() || recognized.is_empty() {
        return 0;
    }
    if target == recognized {
        return 100;
    }

    let max_len = target.chars().count().max(recognized.chars().count());
    let distance = edit_distance(&target, &recognized).min(max_len);

    // round-half-up of (max_len - distance) * 100 / max_len
    let percent = ((max_len - distance) * 200 + max_len) / (2 * max_len);
    percent.min(99) as u8
}

/// Levenshtein distance between two strings, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    // table[i][j] = distance between the first i chars of a and first j of b
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[m][n]
}
