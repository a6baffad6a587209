use chrono::Duration;

pub const DEFAULT_PODIUM_SIZE: usize = 10;
pub const DEFAULT_GROUP_NAME: &str = "Grupo de WhatsApp";
pub const MEDIA_OMITTED_MARKER: &str = "<Multimedia omitido>";

/// Tunables for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Number of words kept on the podium.
    pub podium_size: usize,
    /// Silence longer than this splits two conversations.
    pub gap_threshold: Duration,
    /// Replies slower than this (or exactly this) are not counted as responses.
    pub response_window: Duration,
    /// Shortest cleaned token that still counts as a word.
    pub min_word_length: usize,
    /// Messages containing this text contribute no words.
    pub media_marker: String,
    /// Messages starting with this text contribute no words.
    pub link_prefix: String,
    /// Name used when the transcript never announces the group name.
    pub default_group_name: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            podium_size: DEFAULT_PODIUM_SIZE,
            gap_threshold: Duration::hours(2),
            response_window: Duration::hours(24),
            min_word_length: 4,
            media_marker: MEDIA_OMITTED_MARKER.to_string(),
            link_prefix: "http".to_string(),
            default_group_name: DEFAULT_GROUP_NAME.to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_podium_size(mut self, podium_size: usize) -> Self {
        self.podium_size = podium_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_thresholds() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.podium_size, 10);
        assert_eq!(config.gap_threshold, Duration::minutes(120));
        assert_eq!(config.response_window, Duration::minutes(1440));
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.default_group_name, "Grupo de WhatsApp");
    }

    #[test]
    fn podium_size_can_be_overridden() {
        let config = AnalyzerConfig::default().with_podium_size(3);
        assert_eq!(config.podium_size, 3);
    }
}
