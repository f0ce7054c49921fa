//! `chorewheel` interactive entry point.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and run one menu session on
//!   the process console.
//! - Exit normally in every case; failures are reported, not signalled.

use chorewheel_cli::{Console, Session, SessionEnd};
use chorewheel_core::{init_logging, AppConfig, ChoreService, JsonFileStoreRepository};
use log::{error, info};
use std::path::PathBuf;

fn main() {
    let working_dir = std::env::current_dir().unwrap_or_else(|err| {
        eprintln!("Could not resolve the working directory ({err}); using `.`.");
        PathBuf::from(".")
    });
    let config = AppConfig::from_env(&working_dir);

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("Logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} data_path={}",
        chorewheel_core::core_version(),
        config.data_path().display()
    );

    let service = ChoreService::new(JsonFileStoreRepository::new(config.data_path()));
    let mut session = Session::new(service, config.stop_word.as_str(), rand::rng());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match session.run(&mut console) {
        Ok(SessionEnd::Saved(path)) => {
            info!("event=cli_exit module=cli status=ok saved_to={}", path.display());
        }
        Ok(SessionEnd::InputClosed) => {
            info!("event=cli_exit module=cli status=ok saved=false");
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={}", err);
            eprintln!("Console error: {err}");
        }
    }
}
