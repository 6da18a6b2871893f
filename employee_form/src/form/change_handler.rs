use crate::errors::*;
use crate::form::fields::Field;
use crate::form::notice::{Notice, NUMBERS_ONLY_MESSAGE};
use crate::form::snapshot::{FieldUpdate, FormSnapshot};
use employee_client::FileAttachment;
use log::Level::Debug;
use logging::jlog;

pub const PHONE_MAX_LENGTH: usize = 11;

/// Raw input for one field, as typed or picked by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldChange {
    FirstName(String),
    MiddleName(String),
    LastName(String),
    Email(String),
    Phone(String),
    /// Every file in the current selection; an empty list clears it.
    Picture(Vec<FileAttachment>),
}

impl FieldChange {
    /// Builds a change from a field id and the raw text typed into it.
    pub fn from_input<V: Into<String>>(field: Field, raw: V) -> Result<FieldChange, ApplicationError> {
        let raw = raw.into();
        let change = match field {
            Field::FirstName => FieldChange::FirstName(raw),
            Field::MiddleName => FieldChange::MiddleName(raw),
            Field::LastName => FieldChange::LastName(raw),
            Field::Email => FieldChange::Email(raw),
            Field::Phone => FieldChange::Phone(raw),
            Field::Picture => {
                return NotATextField {
                    field: field.id(),
                }
                .fail()
            }
        };
        Ok(change)
    }

    pub fn field(&self) -> Field {
        match self {
            FieldChange::FirstName(_) => Field::FirstName,
            FieldChange::MiddleName(_) => Field::MiddleName,
            FieldChange::LastName(_) => Field::LastName,
            FieldChange::Email(_) => Field::Email,
            FieldChange::Phone(_) => Field::Phone,
            FieldChange::Picture(_) => Field::Picture,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPhone {
    pub value: String,
    pub stripped_letters: bool,
}

/// Removes every alphabetic character, then keeps at most
/// `PHONE_MAX_LENGTH` characters of what is left.
pub fn normalize_phone(raw: &str) -> NormalizedPhone {
    let stripped_letters = raw.chars().any(char::is_alphabetic);
    let value = raw
        .chars()
        .filter(|c| !c.is_alphabetic())
        .take(PHONE_MAX_LENGTH)
        .collect();
    NormalizedPhone { value, stripped_letters }
}

/// Normalizes a change and commits it to the snapshot. Returns a warning when
/// the input had to be corrected.
pub fn handle_change(snapshot: &mut FormSnapshot, change: FieldChange) -> Option<Notice> {
    let field = change.field();
    let mut notice = None;
    let update = match change {
        FieldChange::Phone(raw) => {
            let phone = normalize_phone(&raw);
            if phone.stripped_letters {
                notice = Some(Notice::Warning(NUMBERS_ONLY_MESSAGE.to_string()));
            }
            FieldUpdate::Phone(phone.value)
        }
        FieldChange::FirstName(value) => FieldUpdate::FirstName(value),
        FieldChange::MiddleName(value) => FieldUpdate::MiddleName(value),
        FieldChange::LastName(value) => FieldUpdate::LastName(value),
        FieldChange::Email(value) => FieldUpdate::Email(value),
        FieldChange::Picture(files) => FieldUpdate::Picture(files.into_iter().next()),
    };

    snapshot.update(update);
    jlog!(Debug, "Field committed", {
        "field": field.id(),
        "corrected": notice.is_some()
    });
    notice
}
