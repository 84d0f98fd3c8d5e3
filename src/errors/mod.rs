//! Error types and error handling for the scanner.
//!
//! This module defines the error types used by the scanner and its I/O
//! layer. It includes:
//!
//! - Error structures with line/column position information
//! - Diagnostics derived from ERROR tokens
//! - I/O failures for reading sources and writing exports
//! - Helpful error messages and suggestions

pub mod errors;
