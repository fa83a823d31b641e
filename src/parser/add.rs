//! Parser for the `add` command.

use super::syntax::{
    FIELD_PREFIXES, PREFIX_ALTERNATE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE,
    PREFIX_TAG, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::tokenize;
use super::util;
use crate::commands::usage::ADD_USAGE;
use crate::commands::{AddCommand, Command};
use crate::error::{ParseError, ParseResult};
use crate::models::Contact;

/// Parse the arguments of `add` into an [`AddCommand`].
///
/// # Errors
///
/// - `InvalidFormat` if a required field is missing or a preamble is given
/// - `DuplicatePrefixes` if a single-valued field is repeated
/// - `Validation` for the first invalid field value
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &FIELD_PREFIXES);

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_NOTE];
    if !map.are_prefixes_present(&required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE.to_string()));
    }
    map.verify_no_duplicate_prefixes(&SINGLE_VALUED_PREFIXES)?;

    let missing = || ParseError::InvalidFormat(ADD_USAGE.to_string());
    let name = util::parse_name(map.value(PREFIX_NAME).ok_or_else(missing)?)?;
    let phone = util::parse_phone(map.value(PREFIX_PHONE).ok_or_else(missing)?)?;
    let email = util::parse_email(map.value(PREFIX_EMAIL).ok_or_else(missing)?)?;
    let note = util::parse_note(map.value(PREFIX_NOTE).ok_or_else(missing)?)?;
    let tags = util::parse_tags(map.all_values(PREFIX_TAG))?;
    let alternates = util::parse_alternates(map.all_values(PREFIX_ALTERNATE))?;

    let contact = Contact::new(name, phone, email, note, tags, alternates);
    Ok(Command::Add(AddCommand::new(contact)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn added(args: &str) -> Contact {
        match parse(args).unwrap() {
            Command::Add(add) => add.contact().clone(),
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_all_fields() {
        let contact = added(
            " n/Alex Yeoh p/87438807 e/alexyeoh@example.com o/Met at fair t/friends t/work a/Telegram@alex",
        );
        assert_eq!(contact.name().as_str(), "Alex Yeoh");
        assert_eq!(contact.phone().as_str(), "87438807");
        assert_eq!(contact.email().as_str(), "alexyeoh@example.com");
        assert_eq!(contact.note().as_str(), "Met at fair");
        assert_eq!(contact.tags().len(), 2);
        assert_eq!(contact.alternates().len(), 1);
    }

    #[test]
    fn test_parse_allows_empty_note() {
        let contact = added(" n/Bob p/123 e/bob@example.com o/");
        assert!(contact.note().is_empty());
        assert!(contact.tags().is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse(" n/Bob p/123 e/bob@example.com").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat(ADD_USAGE.to_string()));
    }

    #[test]
    fn test_non_empty_preamble() {
        let err = parse(" hello n/Bob p/123 e/bob@example.com o/x").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat(ADD_USAGE.to_string()));
    }

    #[test]
    fn test_repeated_single_valued_fields() {
        let err = parse(" n/Bob n/Rob p/123 p/456 e/bob@example.com o/x").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE])
        );
    }

    #[test]
    fn test_first_invalid_value_is_reported() {
        let err = parse(" n/B@b p/12 e/bad o/x t/#").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Validation(ValidationError::InvalidName(_))
        ));

        let err = parse(" n/Bob p/12 e/bad o/x t/#").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Validation(ValidationError::InvalidPhone(_))
        ));
    }
}
