use std::{fs::File, io, path::Path};

use log::info;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{state_label, Token},
    Position,
};

pub const HEADER: [&str; 4] = ["Linea", "Token", "Tipo", "Estado"];

/// Writes the header row and one `;`-delimited record per token.
pub fn write_tokens<W: io::Write>(writer: W, tokens: &[Token]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for token in tokens {
        let line = token.line_number.to_string();
        writer.write_record([
            line.as_str(),
            token.lexeme.as_str(),
            token.category.as_str(),
            state_label(token.state),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn export_to_path(path: &Path, tokens: &[Token]) -> Result<(), Error> {
    let export_failed = |message: String| {
        Error::new(
            ErrorImpl::ExportFailed {
                path: path.display().to_string(),
                message,
            },
            Position::null(),
        )
    };

    let file = File::create(path).map_err(|err| export_failed(err.to_string()))?;
    write_tokens(file, tokens).map_err(|err| export_failed(err.to_string()))?;

    info!("exported {} tokens to {}", tokens.len(), path.display());
    Ok(())
}
