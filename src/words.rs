use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Instant;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::message::Message;
use crate::stats::WordCounts;
use crate::stopwords::StopWords;

static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid non-word regex"));

/// Lowercases a token and strips punctuation, symbols and emoji.
pub fn clean_word(word: &str) -> String {
    NON_WORD_REGEX
        .replace_all(&word.to_lowercase(), "")
        .trim()
        .to_string()
}

pub fn is_significant(cleaned: &str, stop_words: &StopWords, min_length: usize) -> bool {
    !cleaned.is_empty() && cleaned.chars().count() >= min_length && !stop_words.contains(cleaned)
}

/// Media placeholders and bare links carry no words worth counting.
pub fn is_countable_message(text: &str, config: &AnalyzerConfig) -> bool {
    !text.contains(&config.media_marker) && !text.starts_with(&config.link_prefix)
}

pub fn count_words(
    messages: &[Message],
    stop_words: &StopWords,
    config: &AnalyzerConfig,
) -> WordCounts {
    let start_time = Instant::now();
    let mut counts = WordCounts::new();
    let mut skipped_messages = 0usize;

    for message in messages {
        if !is_countable_message(&message.text, config) {
            skipped_messages += 1;
            continue;
        }

        for token in message.text.split_whitespace() {
            let cleaned = clean_word(token);
            if is_significant(&cleaned, stop_words, config.min_word_length) {
                counts.record(&message.author, &cleaned);
            }
        }
    }

    info!(
        action = "complete",
        component = "word_counter",
        author_count = counts.author_count(),
        skipped_messages,
        duration_ms = start_time.elapsed().as_millis(),
        "Word counting completed"
    );
    counts
}
