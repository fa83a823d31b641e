//! Parser for the `find` command.

use crate::commands::usage::FIND_USAGE;
use crate::commands::{Command, FindCommand};
use crate::error::{ParseError, ParseResult};
use crate::models::NameContainsKeywordsPredicate;

pub fn parse(args: &str) -> ParseResult<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FIND_USAGE.to_string()));
    }

    Ok(Command::Find(FindCommand::new(
        NameContainsKeywordsPredicate::new(keywords),
    )))
}
