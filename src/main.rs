// Agenda - meeting scheduler
// Main CLI entry point

use clap::Parser;
use std::process;
use agenda::cli::{Cli, CliDispatcher};
use agenda::utils::error::UserError;

fn main() {
    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        let user_error = UserError::from_agenda_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
