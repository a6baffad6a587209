use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered counter.
///
/// Iteration yields keys in the order they were first seen, so sorting the
/// entries with a stable sort keeps ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, amount: u32) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

/// Per-author word counts, authors and words both in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    authors: Vec<(String, Tally)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, author: &str, word: &str) {
        let position = match self.index.get(author) {
            Some(&position) => position,
            None => {
                self.index.insert(author.to_string(), self.authors.len());
                self.authors.push((author.to_string(), Tally::new()));
                self.authors.len() - 1
            }
        };
        self.authors[position].1.increment(word);
    }

    pub fn get(&self, author: &str) -> Option<&Tally> {
        self.index
            .get(author)
            .map(|&position| &self.authors[position].1)
    }

    /// Number of authors with at least one counted word.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tally)> {
        self.authors
            .iter()
            .map(|(author, words)| (author.as_str(), words))
    }
}

/// Everything derived from the ordering and timing of messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationStats {
    pub message_counts: Tally,
    pub starts: Tally,
    pub ends: Tally,
    response_samples: Vec<(String, Vec<f64>)>,
}

impl ConversationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_response(&mut self, author: &str, minutes: f64) {
        match self
            .response_samples
            .iter_mut()
            .find(|(name, _)| name == author)
        {
            Some((_, samples)) => samples.push(minutes),
            None => self
                .response_samples
                .push((author.to_string(), vec![minutes])),
        }
    }

    pub fn response_samples(&self, author: &str) -> Option<&[f64]> {
        self.response_samples
            .iter()
            .find(|(name, _)| name == author)
            .map(|(_, samples)| samples.as_slice())
    }

    /// Authors with at least one response sample, in first-seen order.
    pub fn responders(&self) -> impl Iterator<Item = &str> {
        self.response_samples.iter().map(|(author, _)| author.as_str())
    }

    /// Mean response time in minutes, `None` when the author never replied.
    pub fn average_response_minutes(&self, author: &str) -> Option<f64> {
        let samples = self.response_samples(author)?;
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumEntry {
    pub word: String,
    pub main_author: String,
    pub main_count: u32,
    pub total_count: u32,
    pub all_authors: Vec<AuthorCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTime {
    pub author: String,
    pub avg_minutes: f64,
    /// Only set for averages of an hour or more.
    pub avg_hours: Option<f64>,
}

/// The exported record handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub group_name: String,
    pub message_stats: Vec<AuthorCount>,
    pub conversation_starts: Vec<AuthorCount>,
    pub conversation_ends: Vec<AuthorCount>,
    pub response_times: Vec<ResponseTime>,
    pub words_podium: Vec<PodiumEntry>,
    pub total_messages: usize,
    pub total_people: usize,
}

impl AnalysisResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
