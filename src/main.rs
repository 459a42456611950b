mod shell;
mod llm;
mod terminal;
mod tools;
mod storage;
mod config;
mod error;

use crate::config::Config;
use crate::shell::Shell;
use anyhow::Result;
use log::debug;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenv::from_filename("key.env").ok();
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    debug!("Loaded configuration: {:?}", config);

    let mut shell = Shell::new(&config)?;
    shell.run().await?;

    Ok(())
}
