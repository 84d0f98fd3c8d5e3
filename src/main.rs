use std::process;

use clap::Parser;
use toy_scanner::{analyze_file, config::config::Config, display_error};

fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .format_timestamp(None)
        .init();

    if let Err(error) = analyze_file(&config) {
        display_error(&error);
        process::exit(1);
    }
}
