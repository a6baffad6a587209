use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single chat message as found in the transcript.
///
/// The timestamp is a naive wall-clock time: exports carry no timezone and
/// none is assumed, which keeps every derived duration independent of the
/// machine running the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: String,
    pub text: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl Message {
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }
}

/// Output of the line parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedChat {
    pub group_name: Option<String>,
    pub messages: Vec<Message>,
    /// Messages that matched the line format but were discarded because their
    /// date or time could not be turned into a timestamp.
    pub dropped_messages: usize,
}
