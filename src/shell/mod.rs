pub mod fragment;
pub mod orchestrator;

use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use crate::config::Config;
use crate::terminal::Terminal;
use self::fragment::{FragmentLabel, ResponseFragment};
use self::orchestrator::TurnOrchestrator;

pub struct Shell {
    terminal: Terminal,
    orchestrator: TurnOrchestrator,
}

impl Shell {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Shell {
            terminal: Terminal::new().context("Failed to initialize terminal")?,
            orchestrator: TurnOrchestrator::new(config).context("Failed to initialize chatbot")?,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            "🤖 Multitasking Chatbot (LLM + Translator + Calculator). Type 'exit' to quit.".bright_green()
        );

        loop {
            // Ctrl+D ends the session like `exit`
            let input = match self.terminal.read_line()? {
                Some(line) => line,
                None => break,
            };
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if is_exit_command(input) {
                break;
            }

            debug!("Handling turn: {}", input);
            let fragments = self.orchestrator.handle_turn(input).await;
            self.display(&fragments);
        }

        info!(
            "Session ended: {} logged turns, {} messages in memory",
            self.orchestrator.log().turns().len(),
            self.orchestrator.memory().len()
        );
        println!("Goodbye!");
        Ok(())
    }

    fn display(&self, fragments: &[ResponseFragment]) {
        println!("\n{}", "🧠 Response:".bright_blue());
        for fragment in fragments {
            let line = fragment.render();
            let line = match fragment.label {
                FragmentLabel::General => line.normal(),
                FragmentLabel::Translation => line.bright_cyan(),
                FragmentLabel::Math => line.bright_yellow(),
                FragmentLabel::Error => line.red(),
            };
            println!("{}", line);
        }
    }
}

fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}
