//! Append-only interaction log, persisted as one pretty-printed JSON array.

use crate::error::ChatError;
use chrono::Local;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub timestamp: String,
    pub question: String,
    pub answer: Vec<String>,
}

impl Turn {
    pub fn now(question: &str, answer: Vec<String>) -> Self {
        Turn {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            question: question.to_string(),
            answer,
        }
    }
}

pub struct InteractionLog {
    path: PathBuf,
    turns: Vec<Turn>,
}

impl InteractionLog {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let turns = load(&path);
        debug!("Loaded {} logged turns from {}", turns.len(), path.display());
        InteractionLog { path, turns }
    }

    pub fn append(&mut self, turn: Turn) -> Result<(), ChatError> {
        self.turns.push(turn);
        save(&self.path, &self.turns)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads the log; a missing, empty or corrupt file counts as no history.
pub fn load(path: &Path) -> Vec<Turn> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Could not read log file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Log file {} is not valid JSON ({}), starting with empty history", path.display(), e);
        Vec::new()
    })
}

/// Rewrites the whole log via a sibling temp file so a crash never leaves it half-written.
pub fn save(path: &Path, turns: &[Turn]) -> Result<(), ChatError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    turns
        .serialize(&mut serializer)
        .map_err(|e| ChatError::LogIo(e.to_string()))?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
