use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_PODIUM_SIZE;
use crate::scoring::DEFAULT_EXCLUDED_AUTHOR;

#[derive(Parser, Debug)]
#[command(
    name = "chatwrapped",
    about = "Turn an exported WhatsApp chat into gamified per-participant statistics",
    version,
    long_about = None
)]
pub struct Args {
    /// Exported chat transcript (.txt)
    #[arg(required_unless_present = "init")]
    pub input: Option<PathBuf>,

    /// Number of words on the podium
    #[arg(short, long, default_value_t = DEFAULT_PODIUM_SIZE)]
    pub top: usize,

    /// Path to custom stop word file
    #[arg(short, long)]
    pub stopwords: Option<PathBuf>,

    /// Count every word, including stop words
    #[arg(long, conflicts_with = "stopwords")]
    pub no_stopwords: bool,

    /// Print the analysis record as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Leave participants whose name contains this text out of the rankings
    #[arg(long, default_value = DEFAULT_EXCLUDED_AUTHOR)]
    pub exclude: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize stopwords.txt with the default stop words
    #[arg(long)]
    pub init: bool,
}
