use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::{
        classifier::is_digit,
        tokens::{Token, UNTERMINATED_STRING},
    },
    Position,
};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds the diagnostic for an ERROR token; `None` for any other category.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.is_error() {
            return None;
        }

        let error_impl = if token.lexeme == UNTERMINATED_STRING {
            ErrorImpl::UnterminatedString
        } else if token.lexeme.chars().next().is_some_and(is_digit) {
            ErrorImpl::MalformedNumber {
                lexeme: token.lexeme.clone(),
            }
        } else {
            ErrorImpl::UnrecognisedSymbol {
                symbol: token.lexeme.clone(),
            }
        };

        Some(Error::new(
            error_impl,
            Position {
                line: token.line_number,
                column: token.column,
            },
        ))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedSymbol { .. } => "UnrecognisedSymbol",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::SourceNotFound { .. } => "SourceNotFound",
            ErrorImpl::ReadFailed { .. } => "ReadFailed",
            ErrorImpl::ExportFailed { .. } => "ExportFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `\"` on the same line",
            )),
            ErrorImpl::UnrecognisedSymbol { symbol } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator, delimiter or identifier character",
                symbol
            )),
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point needs digits on both sides",
                lexeme
            )),
            ErrorImpl::SourceNotFound { .. } => ErrorTip::None,
            ErrorImpl::ReadFailed { message, .. } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::ExportFailed { message, .. } => ErrorTip::Suggestion(message.clone()),
        }
    }

    pub fn internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognised symbol: {symbol:?}")]
    UnrecognisedSymbol { symbol: String },
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("source file not found: {path}")]
    SourceNotFound { path: String },
    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
    #[error("failed to write export {path}: {message}")]
    ExportFailed { path: String, message: String },
}
