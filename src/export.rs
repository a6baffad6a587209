use std::collections::HashMap;

use crate::config::AnalyzerConfig;
use crate::stats::{
    AnalysisResult, AuthorCount, ConversationStats, PodiumEntry, ResponseTime, Tally, WordCounts,
};

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a tally into `{author, count}` entries, most frequent first.
/// Ties keep first-seen order.
pub fn sorted_counts(tally: &Tally) -> Vec<AuthorCount> {
    let mut entries: Vec<AuthorCount> = tally
        .iter()
        .map(|(author, count)| AuthorCount {
            author: author.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Ranks words by their total use across all authors.
pub fn build_podium(word_counts: &WordCounts, top_n: usize) -> Vec<PodiumEntry> {
    let mut rankings: Vec<(String, Vec<AuthorCount>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (author, words) in word_counts.iter() {
        for (word, count) in words.iter() {
            let entry = AuthorCount {
                author: author.to_string(),
                count,
            };
            match index.get(word) {
                Some(&position) => rankings[position].1.push(entry),
                None => {
                    index.insert(word.to_string(), rankings.len());
                    rankings.push((word.to_string(), vec![entry]));
                }
            }
        }
    }

    let mut podium: Vec<PodiumEntry> = rankings
        .into_iter()
        .filter_map(|(word, mut authors)| {
            authors.sort_by(|a, b| b.count.cmp(&a.count));
            let total_count = authors.iter().map(|a| a.count).sum();
            let main = authors.first()?.clone();
            Some(PodiumEntry {
                word,
                main_author: main.author,
                main_count: main.count,
                total_count,
                all_authors: authors,
            })
        })
        .collect();

    podium.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    podium.truncate(top_n);
    podium
}

/// Average response times, fastest responders first.
pub fn response_times(conversation: &ConversationStats) -> Vec<ResponseTime> {
    let mut times: Vec<ResponseTime> = conversation
        .responders()
        .filter_map(|author| {
            let average = conversation.average_response_minutes(author)?;
            Some(ResponseTime {
                author: author.to_string(),
                avg_minutes: round_one_decimal(average),
                avg_hours: (average >= 60.0).then(|| round_one_decimal(average / 60.0)),
            })
        })
        .collect();

    times.sort_by(|a, b| a.avg_minutes.total_cmp(&b.avg_minutes));
    times
}

pub fn build_result(
    group_name: Option<String>,
    total_messages: usize,
    word_counts: &WordCounts,
    conversation: &ConversationStats,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    AnalysisResult {
        group_name: group_name.unwrap_or_else(|| config.default_group_name.clone()),
        message_stats: sorted_counts(&conversation.message_counts),
        conversation_starts: sorted_counts(&conversation.starts),
        conversation_ends: sorted_counts(&conversation.ends),
        response_times: response_times(conversation),
        words_podium: build_podium(word_counts, config.podium_size),
        total_messages,
        total_people: word_counts.author_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_counts(entries: &[(&str, &str, u32)]) -> WordCounts {
        let mut counts = WordCounts::new();
        for (author, word, times) in entries {
            for _ in 0..*times {
                counts.record(author, word);
            }
        }
        counts
    }

    #[test]
    fn rounding_matches_one_decimal() {
        assert_eq!(round_one_decimal(10.0), 10.0);
        assert_eq!(round_one_decimal(12.345), 12.3);
        assert_eq!(round_one_decimal(12.36), 12.4);
        assert_eq!(round_one_decimal(0.04), 0.0);
    }

    #[test]
    fn sorted_counts_are_stable_on_ties() {
        let mut tally = Tally::new();
        tally.increment("Beto");
        tally.increment("Ana");
        tally.add("Carla", 3);

        let sorted = sorted_counts(&tally);
        let names: Vec<&str> = sorted.iter().map(|e| e.author.as_str()).collect();
        assert_eq!(names, vec!["Carla", "Beto", "Ana"]);
    }

    #[test]
    fn podium_totals_and_main_author() {
        let counts = word_counts(&[
            ("Ana", "guitarra", 2),
            ("Ana", "playa", 1),
            ("Beto", "playa", 3),
            ("Beto", "guitarra", 4),
            ("Carla", "fiesta", 1),
        ]);

        let podium = build_podium(&counts, 10);
        let words: Vec<&str> = podium.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["guitarra", "playa", "fiesta"]);

        let guitarra = &podium[0];
        assert_eq!(guitarra.total_count, 6);
        assert_eq!(guitarra.main_author, "Beto");
        assert_eq!(guitarra.main_count, 4);
        assert_eq!(guitarra.all_authors[1].author, "Ana");

        for entry in &podium {
            let sum: u32 = entry.all_authors.iter().map(|a| a.count).sum();
            assert_eq!(sum, entry.total_count);
        }
    }

    #[test]
    fn podium_ties_keep_first_seen_author_and_word() {
        let counts = word_counts(&[("Ana", "mundo", 1), ("Beto", "mundo", 1), ("Beto", "hola", 2)]);
        let podium = build_podium(&counts, 10);
        assert_eq!(podium[0].word, "mundo");
        assert_eq!(podium[0].main_author, "Ana");
        assert_eq!(podium[1].word, "hola");
    }

    #[test]
    fn podium_is_truncated() {
        let counts = word_counts(&[("Ana", "uno1", 3), ("Ana", "dos2", 2), ("Ana", "tres3", 1)]);
        let podium = build_podium(&counts, 2);
        assert_eq!(podium.len(), 2);
        assert_eq!(podium[1].word, "dos2");
    }

    #[test]
    fn response_times_include_hours_only_past_sixty_minutes() {
        let mut conversation = ConversationStats::new();
        conversation.record_response("Lento", 90.0);
        conversation.record_response("Lento", 100.0);
        conversation.record_response("Rapido", 2.04);

        let times = response_times(&conversation);
        assert_eq!(times[0].author, "Rapido");
        assert_eq!(times[0].avg_minutes, 2.0);
        assert_eq!(times[0].avg_hours, None);
        assert_eq!(times[1].author, "Lento");
        assert_eq!(times[1].avg_minutes, 95.0);
        assert_eq!(times[1].avg_hours, Some(1.6));
    }

    #[test]
    fn default_group_name_is_used_when_missing() {
        let result = build_result(
            None,
            0,
            &WordCounts::new(),
            &ConversationStats::new(),
            &AnalyzerConfig::default(),
        );
        assert_eq!(result.group_name, "Grupo de WhatsApp");
        assert!(result.message_stats.is_empty());
        assert!(result.words_podium.is_empty());
        assert_eq!(result.total_people, 0);
    }
}
