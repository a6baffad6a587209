use chrono::Duration;
use std::time::Instant;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::message::Message;
use crate::stats::ConversationStats;

pub fn analyze_conversations(messages: &[Message], config: &AnalyzerConfig) -> ConversationStats {
    let start_time = Instant::now();
    let mut stats = ConversationStats::new();

    for message in messages {
        stats.message_counts.increment(&message.author);
    }

    if messages.len() < 2 {
        return stats;
    }

    detect_boundaries(messages, config, &mut stats);
    sample_response_times(messages, config, &mut stats);

    info!(
        action = "complete",
        component = "conversation_analyzer",
        author_count = stats.message_counts.len(),
        conversation_starts = stats.starts.total(),
        conversation_ends = stats.ends.total(),
        duration_ms = start_time.elapsed().as_millis(),
        "Conversation analysis completed"
    );
    stats
}

/// Elapsed time from `previous` to `current`, when both carry a timestamp.
fn elapsed(previous: &Message, current: &Message) -> Option<Duration> {
    Some(current.timestamp? - previous.timestamp?)
}

fn detect_boundaries(messages: &[Message], config: &AnalyzerConfig, stats: &mut ConversationStats) {
    for pair in messages.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if let Some(gap) = elapsed(previous, current) {
            if gap > config.gap_threshold {
                stats.starts.increment(&current.author);
                stats.ends.increment(&previous.author);
            }
        }
    }

    // The final message always closes a conversation, even when the gap rule
    // above already credited its author.
    if let Some(last) = messages.last() {
        stats.ends.increment(&last.author);
    }
}

fn sample_response_times(
    messages: &[Message],
    config: &AnalyzerConfig,
    stats: &mut ConversationStats,
) {
    for pair in messages.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if previous.author == current.author {
            continue;
        }
        if let Some(delta) = elapsed(previous, current) {
            if delta > Duration::zero() && delta < config.response_window {
                let minutes = delta.num_milliseconds() as f64 / 60_000.0;
                stats.record_response(&current.author, minutes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn message(author: &str, offset_seconds: i64) -> Message {
        Message::new(author, "texto", Some(base() + Duration::seconds(offset_seconds)))
    }

    #[test]
    fn counts_messages_per_author() {
        let messages = vec![message("Ana", 0), message("Beto", 60), message("Ana", 120)];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.message_counts.get("Ana"), Some(2));
        assert_eq!(stats.message_counts.get("Beto"), Some(1));
    }

    #[test]
    fn single_message_has_no_boundaries() {
        let messages = vec![message("Ana", 0)];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.message_counts.get("Ana"), Some(1));
        assert!(stats.starts.is_empty());
        assert!(stats.ends.is_empty());
        assert_eq!(stats.responders().count(), 0);
    }

    #[test]
    fn gap_just_over_threshold_splits_conversations() {
        let messages = vec![message("Ana", 0), message("Beto", 2 * 3600 + 1)];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.starts.get("Beto"), Some(1));
        assert_eq!(stats.ends.get("Ana"), Some(1));
        assert_eq!(stats.ends.get("Beto"), Some(1));
    }

    #[test]
    fn gap_exactly_at_threshold_does_not_split() {
        let messages = vec![message("Ana", 0), message("Beto", 2 * 3600)];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert!(stats.starts.is_empty());
        assert_eq!(stats.ends.get("Ana"), None);
        assert_eq!(stats.ends.get("Beto"), Some(1));
    }

    #[test]
    fn last_author_can_be_credited_twice() {
        let messages = vec![
            message("Ana", 0),
            message("Beto", 60),
            message("Ana", 4 * 3600),
            message("Beto", 8 * 3600),
        ];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.starts.get("Ana"), Some(1));
        assert_eq!(stats.starts.get("Beto"), Some(1));
        assert_eq!(stats.ends.get("Beto"), Some(2));
        assert_eq!(stats.ends.get("Ana"), Some(1));
    }

    #[test]
    fn alternating_authors_produce_response_samples() {
        let messages = vec![message("Ana", 0), message("Beto", 600), message("Ana", 1200)];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.response_samples("Beto"), Some(&[10.0][..]));
        assert_eq!(stats.response_samples("Ana"), Some(&[10.0][..]));
        assert_eq!(stats.average_response_minutes("Ana"), Some(10.0));
    }

    #[test]
    fn same_author_zero_and_day_long_gaps_are_not_responses() {
        let messages = vec![
            message("Ana", 0),
            message("Ana", 60),
            message("Beto", 60),
            message("Ana", 60 + 24 * 3600),
            message("Beto", 60 + 24 * 3600 + 24 * 3600 - 1),
        ];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.response_samples("Ana"), None);
        let beto = stats.response_samples("Beto").unwrap();
        assert_eq!(beto.len(), 1);
        assert!((beto[0] - (24.0 * 60.0 - 1.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn messages_without_timestamps_are_ignored_for_timing() {
        let messages = vec![
            message("Ana", 0),
            Message::new("Beto", "sin hora", None),
            message("Ana", 5 * 3600),
        ];
        let stats = analyze_conversations(&messages, &AnalyzerConfig::default());
        assert_eq!(stats.message_counts.get("Beto"), Some(1));
        assert!(stats.starts.is_empty());
        assert_eq!(stats.responders().count(), 0);
        assert_eq!(stats.ends.get("Ana"), Some(1));
    }
}
