//! Command-line front end for the ordskil tokenizer.
//!
//! This library holds the argument definitions, input handling and the
//! text/CSV/JSON token writers behind the `tokenize` binary.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
