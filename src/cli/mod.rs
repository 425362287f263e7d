use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Stock forecast dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind the API server to
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
        }
        Ok(())
    }
}
