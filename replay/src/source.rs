//! Raw log retrieval
//!
//! The parser itself only ever sees text; these strategies turn a location
//! (local file or replay.pokemonshowdown.com URL) into that text. Retry
//! policy, if any, belongs here and not in the parser — none is implemented.

use std::fs;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

const REPLAY_URL_PREFIX: &str = "https://replay.pokemonshowdown.com";
const HTML_LOG_MARKER: &str = "battle-log-data\">";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read replay file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch replay: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response contained no battle log")]
    MissingLogData,

    #[error("location {0} is not yet supported")]
    UnsupportedLocation(String),
}

/// A strategy producing raw battle log text for a location
pub trait ReplaySource {
    fn retrieve(&self, location: &str) -> Result<String, SourceError>;
}

/// Reads replays saved to disk, either raw logs or downloaded replay pages
#[derive(Debug, Default)]
pub struct FileReplaySource;

impl ReplaySource for FileReplaySource {
    fn retrieve(&self, location: &str) -> Result<String, SourceError> {
        let contents = fs::read_to_string(location)?;

        // Downloaded replay pages embed the log in a script element; a file
        // without the marker is taken as raw log text.
        match extract_embedded_log(&contents) {
            Some(log) => {
                debug!(location, "extracted battle log from replay page");
                Ok(log.to_string())
            }
            None => Ok(contents),
        }
    }
}

fn extract_embedded_log(html: &str) -> Option<&str> {
    let start = html.find(HTML_LOG_MARKER)? + HTML_LOG_MARKER.len();
    let end = html[start..].find("</script>")?;
    Some(&html[start..start + end])
}

/// Fetches replays uploaded to replay.pokemonshowdown.com via the JSON API
#[derive(Debug)]
pub struct UrlReplaySource {
    client: reqwest::blocking::Client,
}

impl UrlReplaySource {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl ReplaySource for UrlReplaySource {
    fn retrieve(&self, location: &str) -> Result<String, SourceError> {
        debug!(location, "fetching replay json");
        let envelope: serde_json::Value = self
            .client
            .get(format!("{location}.json"))
            .send()?
            .error_for_status()?
            .json()?;

        envelope
            .get("log")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(SourceError::MissingLogData)
    }
}

/// Resolve the retrieval strategy for a location: an existing local file, or
/// a replay.pokemonshowdown.com URL.
pub fn resolve_source(location: &str) -> Result<Box<dyn ReplaySource>, SourceError> {
    if Path::new(location).is_file() {
        return Ok(Box::new(FileReplaySource));
    }
    if location.starts_with(REPLAY_URL_PREFIX) {
        return Ok(Box::new(UrlReplaySource::new()?));
    }
    Err(SourceError::UnsupportedLocation(location.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_embedded_log() {
        let html = "<html><script class=\"battle-log-data\">\n|win|Alice\n</script></html>";

        assert_eq!(extract_embedded_log(html), Some("\n|win|Alice\n"));
    }

    #[test]
    fn test_extract_from_raw_log_is_none() {
        assert_eq!(extract_embedded_log("|player|p1|Alice|170|1529"), None);
    }

    #[test]
    fn test_resolve_source_rejects_unknown_location() {
        let result = resolve_source("ftp://example.com/replay");

        assert!(matches!(result, Err(SourceError::UnsupportedLocation(_))));
    }
}
