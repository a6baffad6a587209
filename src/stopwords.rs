use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

// Include the default list at compile time
const DEFAULT_STOP_WORDS: &str = include_str!("../stopwords_es.txt");

pub const STOP_WORDS_FILE: &str = "stopwords.txt";

/// Words excluded from word statistics.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set, which filters nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// The embedded Spanish list.
    pub fn default_set() -> Self {
        Self::from_text(DEFAULT_STOP_WORDS)
    }

    /// Parses one word per line. Blank lines and `#` comments are ignored.
    pub fn from_text(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn load_stop_words(stop_words_path: Option<&Path>) -> Result<StopWords> {
    let start_time = Instant::now();

    let stop_words = if let Some(path) = stop_words_path {
        info!(action = "load", component = "stop_word_file", file_path = ?path, "Loading stop words from specified file");
        if !path.exists() {
            bail!("Stop word file not found: {:?}", path);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop word file {:?}", path))?;
        StopWords::from_text(&content)
    } else {
        // Try default file
        let default_file = Path::new(STOP_WORDS_FILE);
        if default_file.exists() {
            info!(action = "load", component = "default_stop_word_file", file_path = ?default_file, "Loading stop words from default file");
            let content = fs::read_to_string(default_file)
                .with_context(|| format!("Failed to read stop word file {:?}", default_file))?;
            StopWords::from_text(&content)
        } else {
            info!(
                action = "load",
                component = "embedded_stop_words",
                "Using embedded default stop words"
            );
            StopWords::default_set()
        }
    };

    info!(
        action = "complete",
        component = "stop_word_loading",
        word_count = stop_words.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Stop words ready"
    );
    Ok(stop_words)
}

pub fn init_default_stop_words() -> Result<()> {
    let default_file = Path::new(STOP_WORDS_FILE);

    if default_file.exists() {
        bail!("{} already exists. Remove it first if you want to reinitialize.", STOP_WORDS_FILE);
    }

    fs::write(default_file, DEFAULT_STOP_WORDS)
        .with_context(|| format!("Failed to write {}", STOP_WORDS_FILE))?;
    println!("Created {} with default stop words", STOP_WORDS_FILE);

    Ok(())
}
