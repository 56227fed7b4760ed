//! Request field extraction module.

mod parser;
pub mod rules;

pub use parser::{RequestParser, request_lines};
