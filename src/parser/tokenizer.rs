//! Argument tokenizer.
//!
//! Splits the argument text of a command into a preamble and the values that
//! follow each recognised prefix:
//!
//! ```text
//!  1 n/Alex Yeoh t/friends t/family
//! |-| |--------| |------| |------|
//!  preamble  n/      t/       t/
//! ```

use super::syntax::Prefix;
use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;

/// Tokenized arguments: the preamble plus every value supplied for each
/// prefix, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value supplied for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value supplied for `prefix`; empty if the prefix is absent.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Whether every one of `prefixes` was supplied.
    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }

    /// Fail if any of `prefixes` was supplied more than once.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicatePrefixes` naming every repeated prefix,
    /// in the order given.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenize `args` against `prefixes`.
///
/// A prefix only counts when it starts the text or follows whitespace, so
/// `e/` inside `alex@ex.com/e/` is part of a value. Values are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_prefix_positions(args, prefixes);
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(start, _)| follows_whitespace(args, *start))
                .map(move |(start, _)| (start, *prefix))
        })
        .collect()
}

fn follows_whitespace(args: &str, index: usize) -> bool {
    args[..index]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
