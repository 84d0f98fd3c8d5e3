use std::fmt::Write;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

/// Renders one error against the line it points into.
///
/// ```text
/// Error: UnrecognisedSymbol (`#` is not an operator, delimiter or identifier character)
/// -> sample.toy
///   |
/// 5 | a && b || #
///   | ----------^
/// ```
pub fn render_diagnostic(error: &Error, file: &str, line_text: &str) -> String {
    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

/// One diagnostic block per ERROR token, in scan order.
pub fn render_diagnostics(tokens: &[Token], source: &str, file: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();

    tokens
        .iter()
        .filter_map(Error::from_token)
        .map(|error| {
            let line_text = error
                .get_position()
                .line
                .checked_sub(1)
                .and_then(|index| lines.get(index))
                .copied()
                .unwrap_or("");
            render_diagnostic(&error, file, line_text)
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
