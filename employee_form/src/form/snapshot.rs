use crate::form::fields::Field;
use employee_client::FileAttachment;

/// Current values of every form field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub picture: Option<FileAttachment>,
}

/// A replacement value for exactly one field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    FirstName(String),
    MiddleName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Picture(Option<FileAttachment>),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::FirstName(_) => Field::FirstName,
            FieldUpdate::MiddleName(_) => Field::MiddleName,
            FieldUpdate::LastName(_) => Field::LastName,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Phone(_) => Field::Phone,
            FieldUpdate::Picture(_) => Field::Picture,
        }
    }
}

impl FormSnapshot {
    pub fn new() -> FormSnapshot {
        FormSnapshot::default()
    }

    pub fn update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(value) => self.first_name = value,
            FieldUpdate::MiddleName(value) => self.middle_name = value,
            FieldUpdate::LastName(value) => self.last_name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::Picture(value) => self.picture = value,
        }
    }

    pub fn reset(&mut self) {
        *self = FormSnapshot::default();
    }

    /// Text value of a field, `None` for the picture.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(self.first_name.as_str()),
            Field::MiddleName => Some(self.middle_name.as_str()),
            Field::LastName => Some(self.last_name.as_str()),
            Field::Email => Some(self.email.as_str()),
            Field::Phone => Some(self.phone.as_str()),
            Field::Picture => None,
        }
    }

    pub fn has_picture(&self) -> bool {
        self.picture.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == FormSnapshot::default()
    }
}
