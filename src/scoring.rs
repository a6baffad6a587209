//! Weighted overall ranking built on top of an [`AnalysisResult`].
//!
//! Each category awards points relative to the best participant in it:
//! messages and conversation starts up to 25, conversation ends and response
//! speed up to 20, and podium words up to 10.

use serde::{Deserialize, Serialize};

use crate::stats::{AnalysisResult, AuthorCount};

pub const MESSAGE_POINTS: f64 = 25.0;
pub const START_POINTS: f64 = 25.0;
pub const END_POINTS: f64 = 20.0;
pub const SPEED_POINTS: f64 = 20.0;
pub const WORD_POINTS_CAP: u32 = 10;

pub const DEFAULT_EXCLUDED_AUTHOR: &str = "meta ai";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<u32>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        [self.messages, self.starts, self.ends, self.speed, self.words]
            .iter()
            .flatten()
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub author: String,
    pub total: u32,
    pub breakdown: ScoreBreakdown,
}

/// Case-insensitive substring match against the exclusion list.
pub fn is_excluded(author: &str, excluded: &[String]) -> bool {
    let author = author.to_lowercase();
    excluded
        .iter()
        .any(|pattern| !pattern.is_empty() && author.contains(&pattern.to_lowercase()))
}

fn relative_points(count: u32, max: u32, weight: f64) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * weight).round() as u32
}

fn award(
    entries: &[AuthorCount],
    weight: f64,
    scores: &mut [(String, ScoreBreakdown)],
    slot: fn(&mut ScoreBreakdown) -> &mut Option<u32>,
) {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    for entry in entries {
        if let Some((_, breakdown)) = scores.iter_mut().find(|(author, _)| *author == entry.author) {
            *slot(breakdown) = Some(relative_points(entry.count, max, weight));
        }
    }
}

/// Ranks every non-excluded participant, highest total first.
pub fn overall_scores(result: &AnalysisResult, excluded: &[String]) -> Vec<OverallScore> {
    let mut scores: Vec<(String, ScoreBreakdown)> = result
        .message_stats
        .iter()
        .filter(|entry| !is_excluded(&entry.author, excluded))
        .map(|entry| (entry.author.clone(), ScoreBreakdown::default()))
        .collect();

    award(&result.message_stats, MESSAGE_POINTS, &mut scores, |b| &mut b.messages);
    award(&result.conversation_starts, START_POINTS, &mut scores, |b| &mut b.starts);
    award(&result.conversation_ends, END_POINTS, &mut scores, |b| &mut b.ends);

    let responders: Vec<_> = result
        .response_times
        .iter()
        .filter(|entry| !is_excluded(&entry.author, excluded))
        .collect();
    let fastest = responders.iter().map(|r| r.avg_minutes).reduce(f64::min);
    let slowest = responders.iter().map(|r| r.avg_minutes).reduce(f64::max);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        let spread = slowest - fastest;
        for responder in &responders {
            // Identical averages leave nothing to compare; everyone is fastest.
            let normalized = if spread > 0.0 {
                (slowest - responder.avg_minutes) / spread
            } else {
                1.0
            };
            if let Some((_, breakdown)) = scores.iter_mut().find(|(a, _)| *a == responder.author) {
                breakdown.speed = Some((normalized * SPEED_POINTS).round() as u32);
            }
        }
    }

    let mut word_wins: Vec<(String, u32)> = Vec::new();
    for (position, entry) in result.words_podium.iter().enumerate() {
        let points = WORD_POINTS_CAP.saturating_sub(position as u32);
        match word_wins.iter_mut().find(|(a, _)| *a == entry.main_author) {
            Some((_, wins)) => *wins += points,
            None => word_wins.push((entry.main_author.clone(), points)),
        }
    }
    for (author, wins) in word_wins {
        if let Some((_, breakdown)) = scores.iter_mut().find(|(a, _)| *a == author) {
            breakdown.words = Some(wins.min(WORD_POINTS_CAP));
        }
    }

    let mut ranking: Vec<OverallScore> = scores
        .into_iter()
        .map(|(author, breakdown)| OverallScore {
            author,
            total: breakdown.total(),
            breakdown,
        })
        .collect();
    ranking.sort_by(|a, b| b.total.cmp(&a.total));
    ranking
}
