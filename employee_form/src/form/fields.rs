use crate::errors::*;
use employee_client::FileAttachment;
use snafu::ResultExt;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    Picture,
}

impl Field {
    /// Form order, which is also the order parts are sent in.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Picture,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Picture => "picture",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Field::FirstName => "first-name",
            Field::MiddleName => "middle-name",
            Field::LastName => "last-name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Picture => "picture",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Picture => "Insert Image",
        }
    }

    pub fn is_text(self) -> bool {
        self != Field::Picture
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.id() == s || field.flag() == s)
            .ok_or_else(|| ApplicationError::UnknownField { id: s.to_string() })
    }
}

/// Loads a picture from disk. The file name sent to the server is the last
/// path component.
pub fn read_picture(path: &Path) -> Result<FileAttachment, ApplicationError> {
    let bytes = fs::read(path).context(PictureReadError { path })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| Field::Picture.id().to_string());
    Ok(FileAttachment::new(file_name, bytes))
}
