//! Decoder configuration

use gdwire_crypto::DEFAULT_MAX_DECOMPRESSED_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};

/// Values the assembler needs beyond the records themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Prefix for a custom song's listen page, followed by the song id
    pub song_page_url: String,

    /// Prefix for a user's YouTube channel
    pub youtube_url: String,

    /// Prefix for a user's Twitter profile
    pub twitter_url: String,

    /// Prefix for a user's Twitch channel
    pub twitch_url: String,

    /// Ceiling for inflated level data, in bytes
    pub max_level_data_size: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            song_page_url: "https://www.newgrounds.com/audio/listen/".to_string(),
            youtube_url: "https://www.youtube.com/channel/".to_string(),
            twitter_url: "https://twitter.com/".to_string(),
            twitch_url: "https://twitch.tv/".to_string(),
            max_level_data_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}

impl DecodeConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            song_page_url: std::env::var("GDWIRE_SONG_PAGE_URL")
                .unwrap_or(defaults.song_page_url),
            youtube_url: std::env::var("GDWIRE_YOUTUBE_URL").unwrap_or(defaults.youtube_url),
            twitter_url: std::env::var("GDWIRE_TWITTER_URL").unwrap_or(defaults.twitter_url),
            twitch_url: std::env::var("GDWIRE_TWITCH_URL").unwrap_or(defaults.twitch_url),
            max_level_data_size: match std::env::var("GDWIRE_MAX_LEVEL_DATA_SIZE") {
                Ok(value) => value.trim().parse().map_err(|_| {
                    DecodeError::Config(format!("GDWIRE_MAX_LEVEL_DATA_SIZE is not a size: {value}"))
                })?,
                Err(_) => defaults.max_level_data_size,
            },
        })
    }

    /// Load configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DecodeError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecodeConfig::default();
        assert!(config.song_page_url.ends_with('/'));
        assert_eq!(config.max_level_data_size, DEFAULT_MAX_DECOMPRESSED_SIZE);
    }

    #[test]
    fn test_from_json_partial() {
        let config = DecodeConfig::from_json(r#"{"twitch_url": "https://example.test/"}"#)
            .expect("Test operation should succeed");
        assert_eq!(config.twitch_url, "https://example.test/");
        assert_eq!(config.youtube_url, DecodeConfig::default().youtube_url);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = DecodeConfig::from_json(r#"{"max_level_data_size": "big"}"#);
        assert!(matches!(result, Err(DecodeError::Config(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DecodeConfig {
            max_level_data_size: 1024,
            ..DecodeConfig::default()
        };
        let json = serde_json::to_string(&config).expect("Test operation should succeed");
        assert_eq!(
            DecodeConfig::from_json(&json).expect("Test operation should succeed"),
            config
        );
    }
}
