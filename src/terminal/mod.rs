mod history;

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use self::history::History;

pub struct Terminal {
    editor: DefaultEditor,
    history: Option<History>,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .build();

        let mut editor = DefaultEditor::with_config(config)?;

        // A missing home directory only costs us persisted history
        let history = match History::new() {
            Ok(history) => Some(history),
            Err(e) => {
                log::warn!("Input history disabled: {}", e);
                None
            }
        };

        if let Some(history) = &history {
            for entry in history.entries() {
                editor.add_history_entry(entry.as_str())?;
            }
        }

        Ok(Terminal { editor, history })
    }

    /// Returns `None` on end of input. Ctrl+C yields an empty line.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let prompt = format!("\n{} ", "Ask a question:".bright_cyan());

        let line = match self.editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => return Ok(Some(String::new())),
            Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(anyhow::anyhow!("Error reading input: {}", err)),
        };

        let line = line.trim().to_string();
        if !line.is_empty() {
            self.editor.add_history_entry(line.as_str())?;
            if let Some(history) = self.history.as_mut() {
                if let Err(e) = history.add(&line) {
                    log::warn!("Failed to save history: {}", e);
                }
            }
        }

        Ok(Some(line))
    }
}
