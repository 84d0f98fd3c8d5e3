//! Output side of the scanner.
//!
//! - `table` - fixed-width console table of tokens
//! - `export` - semicolon-delimited export
//! - `diagnostics` - caret diagnostics for ERROR tokens

pub mod diagnostics;
pub mod export;
pub mod table;
