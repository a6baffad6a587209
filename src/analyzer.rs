use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::scoring::{self, OverallScore};
use crate::stats::{AnalysisResult, AuthorCount};
use crate::stopwords::{self, StopWords};
use crate::utils::{format_minutes, format_number};
use crate::{conversation, export, input, parser, words, Args};

/// Runs the full pipeline over one transcript.
///
/// Pure apart from logging: the same text, stop words and config always give
/// the same record.
pub fn analyze(content: &str, stop_words: &StopWords, config: &AnalyzerConfig) -> AnalysisResult {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting chat analysis");

    let chat = parser::parse_chat(content);
    let word_counts = words::count_words(&chat.messages, stop_words, config);
    let conversation = conversation::analyze_conversations(&chat.messages, config);
    let result = export::build_result(
        chat.group_name,
        chat.messages.len(),
        &word_counts,
        &conversation,
        config,
    );

    info!(
        action = "complete",
        component = "analysis",
        total_messages = result.total_messages,
        total_people = result.total_people,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    result
}

pub fn analyze_file(args: &Args) -> Result<AnalysisResult> {
    let path = args
        .input
        .as_deref()
        .context("No transcript file given")?;
    let content = input::read_transcript(path)?;

    let stop_words = if args.no_stopwords {
        StopWords::none()
    } else {
        stopwords::load_stop_words(args.stopwords.as_deref())?
    };

    let config = AnalyzerConfig::default().with_podium_size(args.top);
    Ok(analyze(&content, &stop_words, &config))
}

pub fn print_output(result: &AnalysisResult, args: &Args) -> Result<()> {
    if args.json {
        let json = if args.pretty {
            result.to_json_pretty()?
        } else {
            result.to_json()?
        };
        println!("{}", json);
    } else {
        let scores = scoring::overall_scores(result, &args.exclude);
        print_analysis_results(result, &scores, args);
    }
    Ok(())
}

fn print_counts(title: &str, unit: &str, entries: &[AuthorCount]) {
    println!("\n{}:", title);
    if entries.is_empty() {
        println!("- (none)");
    }
    for (position, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {}: {} {}",
            position + 1,
            entry.author,
            format_number(u64::from(entry.count)),
            unit
        );
    }
}

pub fn print_analysis_results(result: &AnalysisResult, scores: &[OverallScore], args: &Args) {
    println!("\n--- {} ---", result.group_name);
    println!(
        "Total messages: {}",
        format_number(result.total_messages as u64)
    );
    println!(
        "Participants with counted words: {}",
        format_number(result.total_people as u64)
    );

    print_counts("Most messages", "messages", &result.message_stats);
    print_counts("Conversation starters", "conversations", &result.conversation_starts);
    print_counts("Conversation closers", "conversations", &result.conversation_ends);

    println!("\nFastest responders:");
    let responders = result
        .response_times
        .iter()
        .filter(|entry| !scoring::is_excluded(&entry.author, &args.exclude));
    for (position, entry) in responders.enumerate() {
        println!(
            "{:>3}. {}: {}",
            position + 1,
            entry.author,
            format_minutes(entry.avg_minutes, entry.avg_hours)
        );
    }

    println!("\nTop {} words:", result.words_podium.len());
    for (position, entry) in result.words_podium.iter().enumerate() {
        let others: Vec<String> = entry
            .all_authors
            .iter()
            .skip(1)
            .take(3)
            .map(|a| format!("{} ({})", a.author, a.count))
            .collect();
        print!(
            "{:>3}. \"{}\" x{} - {} ({})",
            position + 1,
            entry.word,
            format_number(u64::from(entry.total_count)),
            entry.main_author,
            entry.main_count
        );
        if others.is_empty() {
            println!();
        } else {
            println!(", also {}", others.join(", "));
        }
    }

    println!("\nOverall ranking:");
    for (position, score) in scores.iter().enumerate() {
        let breakdown = &score.breakdown;
        let details: Vec<String> = [
            ("messages", breakdown.messages),
            ("starts", breakdown.starts),
            ("ends", breakdown.ends),
            ("speed", breakdown.speed),
            ("words", breakdown.words),
        ]
        .iter()
        .filter_map(|(label, points)| points.map(|p| format!("{}: {}pts", label, p)))
        .collect();
        println!(
            "{:>3}. {}: {} points ({})",
            position + 1,
            score.author,
            score.total,
            details.join(", ")
        );
    }
}
