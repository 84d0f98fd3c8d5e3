//! Lexical analysis module for the toy language.
//!
//! This module contains the line scanner that converts source lines into
//! classified tokens. It handles:
//!
//! - Maximal-munch segmentation of a line into token candidates
//! - Classification of each candidate into a category and accepting state
//! - Comments, string literals and unrecognised symbols
//! - Column tracking for diagnostics

pub mod classifier;
pub mod scanner;
pub mod tokens;
