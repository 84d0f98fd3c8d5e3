#![allow(clippy::module_inception)]

use std::{fs, io, path::Path};

use log::{info, warn};

use crate::{
    config::config::Config,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{scanner::scan_source, tokens::Token},
    report::{diagnostics::render_diagnostics, export::export_to_path, table::render_table},
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: String,
    pub tokens: Vec<Token>,
}

impl Analysis {
    pub fn error_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_error()).count()
    }
}

pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| {
        let path = path.display().to_string();
        let error_impl = if err.kind() == io::ErrorKind::NotFound {
            ErrorImpl::SourceNotFound { path }
        } else {
            ErrorImpl::ReadFailed {
                path,
                message: err.to_string(),
            }
        };
        Error::new(error_impl, Position::null())
    })
}

/// Scans the configured input and reports it: table, diagnostics and export,
/// each as the configuration asks.
pub fn analyze_file(config: &Config) -> Result<Analysis, Error> {
    let source = read_source(&config.input)?;
    info!("read {} ({} bytes)", config.input.display(), source.len());

    let tokens = scan_source(&source);
    let analysis = Analysis { source, tokens };

    if !config.quiet {
        println!("{}", render_table(&analysis.tokens));
    }

    let errors = analysis.error_count();
    if errors > 0 {
        warn!("{} invalid token(s) in {}", errors, config.input.display());

        if config.diagnostics {
            let file = config.input.display().to_string();
            eprintln!("{}", render_diagnostics(&analysis.tokens, &analysis.source, &file));
        }
    }

    if !config.no_export {
        export_to_path(&config.output, &analysis.tokens)?;
        if !config.quiet {
            println!("\nResultado guardado en: {}", config.output.display());
        }
    }

    info!(
        "scanned {} line(s): {} token(s), {} error(s)",
        analysis.source.lines().count(),
        analysis.tokens.len(),
        errors
    );

    Ok(analysis)
}

pub fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
}
