//! Parser for the `delete` command.

use super::util;
use crate::commands::usage::DELETE_USAGE;
use crate::commands::{Command, DeleteCommand};
use crate::domain::Index;
use crate::error::{ParseError, ParseResult};

/// Parse one or more whitespace separated indices.
///
/// Repeated indices are dropped, keeping the first occurrence, and the
/// command is told that the input contained them.
pub fn parse(args: &str) -> ParseResult<Command> {
    let parsed: Vec<Index> = args
        .split_whitespace()
        .map(|token| util::parse_index(token, DELETE_USAGE))
        .collect::<ParseResult<_>>()?;

    if parsed.is_empty() {
        return Err(ParseError::InvalidFormat(DELETE_USAGE.to_string()));
    }

    let mut indices = Vec::with_capacity(parsed.len());
    for index in &parsed {
        if !indices.contains(index) {
            indices.push(*index);
        }
    }
    let had_duplicates = indices.len() != parsed.len();

    Ok(Command::Delete(DeleteCommand::new(indices, had_duplicates)))
}
