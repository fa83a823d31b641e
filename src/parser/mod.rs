//! Command line parsing.
//!
//! A line is split into its command word and argument text; the argument
//! text is handed to the parser for that word, which tokenizes it and builds
//! a validated [`Command`].

mod add;
mod delete;
mod edit;
mod find;
pub mod syntax;
mod tokenizer;
mod util;

pub use syntax::Prefix;
pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::commands::usage::{
    self, help_text, CLEAR_USAGE, EXIT_USAGE, HELP_USAGE, LIST_USAGE,
};
use crate::commands::Command;
use crate::error::{ParseError, ParseResult};

/// Parse one line of user input.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for blank input,
/// `ParseError::UnknownCommand` for an unrecognised command word, or
/// whatever the command's own parser reports.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidFormat(help_text()));
    }

    let (word, args) = input
        .find(char::is_whitespace)
        .map_or((input, ""), |split| input.split_at(split));

    tracing::debug!(word, args, "Parsing command");

    match word {
        usage::ADD_WORD => add::parse(args),
        usage::EDIT_WORD => edit::parse(args),
        usage::DELETE_WORD => delete::parse(args),
        usage::FIND_WORD => find::parse(args),
        usage::LIST_WORD => without_arguments(args, Command::List, LIST_USAGE),
        usage::CLEAR_WORD => without_arguments(args, Command::Clear, CLEAR_USAGE),
        usage::EXIT_WORD => without_arguments(args, Command::Exit, EXIT_USAGE),
        usage::HELP_WORD => without_arguments(args, Command::Help, HELP_USAGE),
        _ => Err(ParseError::UnknownCommand),
    }
}

fn without_arguments(args: &str, command: Command, usage: &str) -> ParseResult<Command> {
    if args.trim().is_empty() {
        Ok(command)
    } else {
        Err(ParseError::InvalidFormat(usage.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_shows_help_usage() {
        assert_eq!(
            parse_command("   ").unwrap_err(),
            ParseError::InvalidFormat(help_text())
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("remove 1").unwrap_err(),
            ParseError::UnknownCommand
        );
        // Command words are case-sensitive.
        assert_eq!(parse_command("LIST").unwrap_err(), ParseError::UnknownCommand);
    }

    #[test]
    fn test_commands_without_arguments() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command("  clear  ").unwrap(), Command::Clear);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_trailing_preamble_rejected() {
        assert_eq!(
            parse_command("list all").unwrap_err(),
            ParseError::InvalidFormat(LIST_USAGE.to_string())
        );
        assert_eq!(
            parse_command("exit now").unwrap_err(),
            ParseError::InvalidFormat(EXIT_USAGE.to_string())
        );
    }

    #[test]
    fn test_word_must_be_separated_by_whitespace() {
        assert_eq!(
            parse_command("list1").unwrap_err(),
            ParseError::UnknownCommand
        );
    }

    #[test]
    fn test_dispatches_by_word() {
        let command = parse_command("delete 2").unwrap();
        assert_eq!(command.word(), usage::DELETE_WORD);

        let command = parse_command("add n/Amy p/123 e/amy@example.com o/hi").unwrap();
        assert_eq!(command.word(), usage::ADD_WORD);
    }
}
