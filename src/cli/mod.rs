// CLI module for command-line interface

pub mod cm;

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::utils::config::{default_data_dir, AgendaConfig, ConfigParser};
use crate::utils::error::Result;
use crate::utils::logging::init_logging;

use self::cm::CmCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Schedule meetings among registered users")]
#[command(long_about = r#"Agenda keeps a shared list of meetings for registered users and
refuses meetings that would double-book anyone.

Data lives in one directory (default ~/.agenda):
  users.json      registered users
  session.json    the signed-in user
  meetings.json   every stored meeting
  agenda.log      audit log
  agenda.toml     optional settings

Examples:
  agenda cm -t Standup -o alice -p bob,carol -s "2024-01-01 09:00" -e "2024-01-01 10:00"
  agenda --data-dir ./team cm -t Retro -o bob -p alice -s "2024-01-02 15:00" -e "2024-01-02 16:00""#)]
#[command(version)]
pub struct Cli {
    /// Directory holding users, session, meetings and the audit log
    #[arg(long, global = true, env = "AGENDA_HOME")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a meeting
    #[command(long_about = r#"Create a meeting among registered users.

You must be signed in. The originator and every participant must be
registered, none of them may already have a meeting at that time, and the
title must not be in use.

Times are compared as text, so use a fixed-width format such as
"YYYY-MM-DD HH:MM".

Examples:
  agenda cm -t Standup -o alice -p bob -s "2024-01-01 09:00" -e "2024-01-01 10:00"
  agenda cm --title Retro --originator bob --participants alice,carol \
            --startTime "2024-01-02 15:00" --endTime "2024-01-02 16:00" --json"#)]
    Cm(CmCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Load configuration, start the audit log and execute a CLI command
    pub fn execute(cli: Cli) -> Result<()> {
        let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
        let config = ConfigParser::load(&data_dir)?;
        let _logger = init_logging(&config.log_level, &config.data_dir, &config.log_file_basename)?;

        Self::dispatch(cli.command, &config)
    }

    fn dispatch(command: Commands, config: &AgendaConfig) -> Result<()> {
        match command {
            Commands::Cm(cmd) => cmd.run(config),
        }
    }
}
