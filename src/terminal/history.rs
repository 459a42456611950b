use anyhow::{Result, Context};
use std::fs;
use std::path::PathBuf;

const MAX_HISTORY_SIZE: usize = 1000;

/// Past questions, one per line in `~/.tool_chatbot_history`.
pub struct History {
    path: PathBuf,
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Self::with_path(home_dir.join(".tool_chatbot_history"))
    }

    pub fn with_path(path: PathBuf) -> Result<Self> {
        let entries = match fs::read_to_string(&path) {
            Ok(content) => {
                let mut entries: Vec<String> = content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect();
                cap(&mut entries);
                entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e).with_context(|| format!("Could not read {}", path.display())),
        };

        Ok(History { path, entries })
    }

    /// Records a question; blank lines and repeats of the previous one are skipped.
    pub fn add(&mut self, question: &str) -> Result<()> {
        let question = question.trim();
        if question.is_empty() || self.entries.last().map(String::as_str) == Some(question) {
            return Ok(());
        }

        self.entries.push(question.to_string());
        cap(&mut self.entries);

        let mut content = self.entries.join("\n");
        content.push('\n');
        fs::write(&self.path, content).with_context(|| format!("Could not write {}", self.path.display()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn cap(entries: &mut Vec<String>) {
    if entries.len() > MAX_HISTORY_SIZE {
        let excess = entries.len() - MAX_HISTORY_SIZE;
        entries.drain(..excess);
    }
}
