use std::io::{stdin, stdout};

mod agent;
mod config;
mod gomoku;
mod gtp;

use config::Config;
use gtp::Connection;

fn main() {
    let mut config = Config::from_env();

    if std::env::args().skip(1).any(|arg| arg == "--debug") {
        config.debug = true;
    }

    if config.debug {
        eprintln!("Starting with {config:?}");
    }

    let mut conn = Connection::new(stdin().lock(), stdout().lock(), &config);

    if let Err(err) = conn.run() {
        eprintln!("Fatal: {err}");
        std::process::exit(1);
    }
}
