use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{
    Category, State, COMMENT_MARKER, DELIMITER_LOOKUP, OPERATOR_LOOKUP, RESERVED_WORDS,
    STRING_QUOTE,
};

lazy_static! {
    static ref DECIMAL: Regex = Regex::new("^[0-9]+\\.[0-9]+$").unwrap();
    static ref INTEGER: Regex = Regex::new("^[0-9]+$").unwrap();
}

pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_decimal(token: &str) -> bool {
    DECIMAL.is_match(token)
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Decides the category and accepting state of a finished lexeme.
///
/// The checks run in a fixed order and the first match wins, so a lexeme
/// that is both a reserved word and a valid identifier is a reserved word.
/// Only `Category::Error` comes back without a state.
pub fn classify(token: &str) -> (Category, Option<State>) {
    if RESERVED_WORDS.contains(token) {
        return (Category::ReservedWord, Some(State::Q0));
    }

    if let Some(state) = OPERATOR_LOOKUP.get(token) {
        return (Category::Operator, Some(*state));
    }

    if let Some(state) = single_char(token).and_then(|c| DELIMITER_LOOKUP.get(&c)) {
        return (Category::Delimiter, Some(*state));
    }

    if is_decimal(token) {
        return (Category::Number, Some(State::Q3));
    }

    if INTEGER.is_match(token) {
        return (Category::Number, Some(State::Q2));
    }

    if token.starts_with(STRING_QUOTE) && token.ends_with(STRING_QUOTE) {
        return (Category::String, Some(State::Q0));
    }

    if token.chars().next().is_some_and(is_letter) {
        if token.chars().any(is_digit) {
            return (Category::Identifier, Some(State::Q15));
        }
        return (Category::Identifier, Some(State::Q9));
    }

    if single_char(token) == Some(COMMENT_MARKER) {
        return (Category::Comment, Some(State::Q17));
    }

    (Category::Error, None)
}

pub fn category_of(token: &str) -> Category {
    classify(token).0
}

pub fn state_of(token: &str) -> Option<State> {
    classify(token).1
}
