//! Field parsing helpers shared by the command parsers.
//!
//! Each helper trims the raw value before handing it to the field's
//! constructor.

use crate::domain::{AlternateContact, Email, Index, Name, Note, Phone, Tag};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parse a single positive index, or fail with the command's usage.
pub fn parse_index(text: &str, usage: &str) -> ParseResult<Index> {
    Index::parse(text.trim()).ok_or_else(|| ParseError::InvalidFormat(usage.to_string()))
}

pub fn parse_name(value: &str) -> ParseResult<Name> {
    Ok(Name::new(value.trim())?)
}

pub fn parse_phone(value: &str) -> ParseResult<Phone> {
    Ok(Phone::new(value.trim())?)
}

pub fn parse_email(value: &str) -> ParseResult<Email> {
    Ok(Email::new(value.trim())?)
}

pub fn parse_note(value: &str) -> ParseResult<Note> {
    Ok(Note::new(value.trim())?)
}

/// Parse every tag value; the first invalid one is reported.
pub fn parse_tags(values: &[String]) -> ParseResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|v| Tag::new(v.trim()).map_err(ParseError::from))
        .collect()
}

/// Parse every alternate contact value; the first invalid one is reported.
pub fn parse_alternates(values: &[String]) -> ParseResult<BTreeSet<AlternateContact>> {
    values
        .iter()
        .map(|v| AlternateContact::new(v.trim()).map_err(ParseError::from))
        .collect()
}

/// Whether a set-valued prefix was given exactly once with an empty value,
/// which an edit treats as "clear this set".
pub fn is_reset(values: &[String]) -> bool {
    values.len() == 1 && values[0].trim().is_empty()
}
