//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, classifying the lexeme when no
//!   category and state are given

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$line` - The 1-based line number
/// * `$column` - The 1-based column where the lexeme starts
/// * `$lexeme` - The scanned text, as a `String`
/// * `$category`, `$state` - Optional; when omitted the lexeme is run
///   through the classifier
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(3, 1, String::from("42"));
/// let error = MK_TOKEN!(3, 4, String::from("#"), Category::Error, None);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($line:expr, $column:expr, $lexeme:expr, $category:expr, $state:expr) => {
        $crate::lexer::tokens::Token {
            line_number: $line,
            column: $column,
            lexeme: $lexeme,
            category: $category,
            state: $state,
        }
    };
    ($line:expr, $column:expr, $lexeme:expr) => {{
        let lexeme: String = $lexeme;
        let (category, state) = $crate::lexer::classifier::classify(&lexeme);
        $crate::MK_TOKEN!($line, $column, lexeme, category, state)
    }};
}
