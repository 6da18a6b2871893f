use std::fmt;
use validator::ValidationError;

pub const NUMBERS_ONLY_MESSAGE: &str = "Numbers Only";
pub const SUBMIT_FAILED_PREFIX: &str = "Error submitting form data";

/// What the presentation layer should tell the user after a change or a
/// submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Input was corrected in place.
    Warning(String),
    /// The validation gate stopped the submission.
    Invalid(ValidationError),
    /// The server accepted the record; carries its message verbatim.
    Submitted(String),
    /// The request failed; carries the error details.
    SubmitFailed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        match self {
            Notice::Invalid(_) | Notice::SubmitFailed(_) => true,
            Notice::Warning(_) | Notice::Submitted(_) => false,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notice::Warning(message) | Notice::Submitted(message) => f.write_str(message),
            Notice::Invalid(error) => match &error.message {
                Some(message) => f.write_str(message),
                None => f.write_str(&error.code),
            },
            Notice::SubmitFailed(details) => write!(f, "{}: {}", SUBMIT_FAILED_PREFIX, details),
        }
    }
}
