//! Parser for the `edit` command.

use super::syntax::{
    Prefix, FIELD_PREFIXES, PREFIX_ALTERNATE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE,
    PREFIX_PHONE, PREFIX_TAG, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util;
use crate::commands::usage::EDIT_USAGE;
use crate::commands::{Command, EditCommand, EditContactDescriptor};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parse the arguments of `edit` into an [`EditCommand`].
///
/// A single empty `t/` clears the contact's tags, and likewise for `a/`.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &FIELD_PREFIXES);

    let index = util::parse_index(map.preamble(), EDIT_USAGE)?;
    map.verify_no_duplicate_prefixes(&SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditContactDescriptor {
        name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        note: map.value(PREFIX_NOTE).map(util::parse_note).transpose()?,
        tags: parse_set(&map, PREFIX_TAG, util::parse_tags)?,
        alternates: parse_set(&map, PREFIX_ALTERNATE, util::parse_alternates)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

fn parse_set<T: Ord>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse_values: fn(&[String]) -> ParseResult<BTreeSet<T>>,
) -> ParseResult<Option<BTreeSet<T>>> {
    let values = map.all_values(prefix);
    if values.is_empty() {
        Ok(None)
    } else if util::is_reset(values) {
        Ok(Some(BTreeSet::new()))
    } else {
        parse_values(values).map(Some)
    }
}
