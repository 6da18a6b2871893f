use crate::form::fields::Field;
use crate::form::snapshot::FormSnapshot;
use std::borrow::Cow;
use validator::ValidationError;

pub const REQUIRED_CODE: &str = "required";
pub const EMAIL_CODE: &str = "email";
pub const PICTURE_CODE: &str = "picture";

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const MISSING_PICTURE_MESSAGE: &str = "Please Input File";

// Checked in this order; middle_name is optional.
const REQUIRED_FIELDS: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}

/// Runs the gate over a snapshot. Only the first failing check is reported.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    for field in REQUIRED_FIELDS.iter() {
        if snapshot.text(*field).map_or(true, str::is_empty) {
            let mut validation_error = create_validation_error(REQUIRED_CODE, REQUIRED_FIELDS_MESSAGE);
            validation_error.add_param(Cow::from("field"), &field.id());
            return Err(validation_error);
        }
    }

    if !snapshot.email.contains('@') {
        let mut validation_error = create_validation_error(EMAIL_CODE, INVALID_EMAIL_MESSAGE);
        validation_error.add_param(Cow::from("value"), &snapshot.email);
        return Err(validation_error);
    }

    if !snapshot.has_picture() {
        return Err(create_validation_error(PICTURE_CODE, MISSING_PICTURE_MESSAGE));
    }

    Ok(())
}
