use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "toy_scanner",
    version,
    about = "Line-oriented lexical scanner for the toy language"
)]
pub struct Config {
    /// Source file to scan
    #[arg(default_value = "prueba.txt")]
    pub input: PathBuf,

    /// Where the `;`-delimited export is written
    #[arg(short, long, default_value = "resultado_lexico.csv")]
    pub output: PathBuf,

    /// Skip writing the export
    #[arg(long)]
    pub no_export: bool,

    /// Do not print the token table
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a caret diagnostic for every ERROR token
    #[arg(short, long)]
    pub diagnostics: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use log::LevelFilter;

    use super::Config;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["toy_scanner"]);

        assert_eq!(config.input, PathBuf::from("prueba.txt"));
        assert_eq!(config.output, PathBuf::from("resultado_lexico.csv"));
        assert!(!config.no_export);
        assert!(!config.quiet);
        assert!(!config.diagnostics);
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "toy_scanner",
            "input.toy",
            "-o",
            "out.csv",
            "--no-export",
            "-q",
            "-d",
            "-vv",
        ]);

        assert_eq!(config.input, PathBuf::from("input.toy"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert!(config.no_export);
        assert!(config.quiet);
        assert!(config.diagnostics);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_verbosity_saturates_at_trace() {
        let config = Config::parse_from(["toy_scanner", "-vvvvv"]);
        assert_eq!(config.log_level(), LevelFilter::Trace);
    }
}
