use crate::lexer::tokens::{state_label, Token};

pub fn render_header() -> String {
    format!(
        "{:<7} {:<20} {:<20} {}\n{}",
        "Line",
        "Token",
        "Type",
        "State",
        "-".repeat(60)
    )
}

pub fn render_row(token: &Token) -> String {
    format!(
        "{:<7} {:<20} {:<20} {}",
        token.line_number,
        token.lexeme,
        token.category.as_str(),
        state_label(token.state)
    )
}

pub fn render_table(tokens: &[Token]) -> String {
    let mut lines = vec![render_header()];
    lines.extend(tokens.iter().map(render_row));
    lines.join("\n")
}
