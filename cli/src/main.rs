mod cli;
mod commands;
mod config;
mod logging;

use clap::{CommandFactory, Parser};
use cli::Cli;
use commands::Dispatcher;
use config::Config;
use notes_core::Database;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::default();
    logging::init_logging(config.log_level);

    let Some(command) = Cli::parse().command else {
        // Bare invocation shows usage rather than failing
        if let Err(err) = Cli::command().print_help() {
            println!("Error: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(err) => {
            println!("Error initializing storage: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = {
        let mut stdout = io::stdout().lock();
        Dispatcher::new(&db)
            .run(command, &mut stdout)
            .and_then(|()| stdout.flush().map_err(Into::into))
    };

    if let Err(err) = db.close() {
        println!("Error closing storage: {err}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
