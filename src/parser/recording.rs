use super::types::UserFlow;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning recording text into a [`UserFlow`]
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("No recording found. Please create and upload before trying again")]
    Empty,

    #[error("Invalid recording: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the content of a Chrome DevTools recording export
pub fn parse_recording_content(content: &str) -> Result<UserFlow, RecordingError> {
    if content.trim().is_empty() {
        return Err(RecordingError::Empty);
    }

    let flow: UserFlow = serde_json::from_str(content)?;
    log::debug!(
        "Parsed recording \"{}\" with {} steps",
        flow.title,
        flow.steps.len()
    );
    Ok(flow)
}

/// Read and parse a recording file
pub fn parse_recording_file(path: &Path) -> Result<UserFlow> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    parse_recording_content(&content)
        .with_context(|| format!("Failed to parse recording: {}", path.display()))
}
