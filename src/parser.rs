use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::time::Instant;
use tracing::{debug, info};

use crate::message::{Message, ParsedChat};

/// `DD/MM/YYYY, HH:MM - Author: text`
///
/// The author is the shortest run of characters followed by `": "`, so the line
/// is split at the first `": "` after the ` - ` separator. An author such as
/// `Ana:B` survives intact, while `Dr: Who: hola` yields author `Dr`.
static MESSAGE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}), ([0-9]{1,2}):([0-9]{2}) - (.+?): (.+)$")
        .expect("Invalid message line regex")
});

static GROUP_CREATED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"creó el grupo "(.+?)""#).expect("Invalid group name regex"));

struct OpenMessage {
    author: String,
    parts: Vec<String>,
    timestamp: Option<NaiveDateTime>,
    line_number: usize,
}

/// Parses a full transcript into its ordered messages.
///
/// Lines that do not start a message continue the open one. A message is kept
/// only if it has text and a valid timestamp.
pub fn parse_chat(content: &str) -> ParsedChat {
    let start_time = Instant::now();
    let mut chat = ParsedChat::default();
    let mut current: Option<OpenMessage> = None;

    for (index, line) in content.split('\n').enumerate() {
        if chat.group_name.is_none() {
            chat.group_name = extract_group_name(line);
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = MESSAGE_LINE_REGEX.captures(line) {
            if let Some(open) = current.take() {
                flush(open, &mut chat);
            }
            current = Some(OpenMessage {
                author: captures[6].trim().to_string(),
                parts: vec![captures[7].to_string()],
                timestamp: build_timestamp(&captures),
                line_number: index + 1,
            });
        } else if let Some(open) = current.as_mut() {
            open.parts.push(line.to_string());
        }
    }

    if let Some(open) = current.take() {
        flush(open, &mut chat);
    }

    info!(
        action = "complete",
        component = "line_parser",
        message_count = chat.messages.len(),
        dropped_messages = chat.dropped_messages,
        group_name = chat.group_name.as_deref().unwrap_or(""),
        duration_ms = start_time.elapsed().as_millis(),
        "Transcript parsed"
    );
    chat
}

fn flush(open: OpenMessage, chat: &mut ParsedChat) {
    if open.author.is_empty() || open.parts.is_empty() {
        return;
    }
    match open.timestamp {
        Some(timestamp) => chat.messages.push(Message {
            author: open.author,
            text: open.parts.join(" "),
            timestamp: Some(timestamp),
        }),
        None => {
            debug!(
                action = "drop",
                component = "line_parser",
                line_number = open.line_number,
                author = %open.author,
                "Dropping message with invalid date or time"
            );
            chat.dropped_messages += 1;
        }
    }
}

pub fn extract_group_name(line: &str) -> Option<String> {
    GROUP_CREATED_REGEX
        .captures(line)
        .map(|captures| captures[1].to_string())
}

fn build_timestamp(captures: &Captures) -> Option<NaiveDateTime> {
    let field = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };

    let day = field(1)?;
    let month = field(2)?;
    let year = i32::try_from(field(3)?).ok()?;
    let hour = field(4)?;
    let minute = field(5)?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}
