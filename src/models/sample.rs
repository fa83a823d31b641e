//! Sample contacts for seeding an empty data file.

use super::{Contact, Contacts};
use crate::domain::{AlternateContact, Email, Name, Note, Phone, Tag, ValidationError};
use crate::error::ContactsError;
use std::collections::BTreeSet;
use thiserror::Error;

// name, phone, email, tags, alternate contacts
const SAMPLES: &[(&str, &str, &str, &[&str], &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", &["friends"], &["Example@Alexyeoh"]),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        &["colleagues", "friends"],
        &["Example@berniceyu123"],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        &["neighbours"],
        &["Example@Charlotte21"],
    ),
    ("David Li", "91031282", "lidavid@example.com", &["family"], &["Example@dl312"]),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        &["classmates"],
        &["Example@IrfanIbrahim"],
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        &["colleagues"],
        &["Example@RoyBalakrishnan"],
    ),
];

const SAMPLE_NOTE: &str = "CS2103 tutorial mate.";

/// Build the sample contact list.
///
/// Falls back to an empty list, logging the cause, if a sample row fails
/// validation.
pub fn sample_contacts() -> Contacts {
    match build_samples() {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::error!(error = %e, "Sample contacts are invalid");
            Contacts::new()
        }
    }
}

fn build_samples() -> Result<Contacts, SampleError> {
    let contacts = SAMPLES
        .iter()
        .map(|(name, phone, email, tags, alternates)| -> Result<Contact, SampleError> {
            Ok(Contact::new(
                Name::new(*name)?,
                Phone::new(*phone)?,
                Email::new(*email)?,
                Note::new(SAMPLE_NOTE)?,
                tags.iter()
                    .map(|t| Tag::new(*t))
                    .collect::<Result<BTreeSet<_>, _>>()?,
                alternates
                    .iter()
                    .map(|a| AlternateContact::new(*a))
                    .collect::<Result<BTreeSet<_>, _>>()?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Contacts::try_from(contacts)?)
}

#[derive(Debug, Error)]
enum SampleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Contacts(#[from] ContactsError),
}
