use serde::{Deserialize, Serialize};

/// Body returned by the collaborator after a record is inserted. The message
/// is shown to the user as-is.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InsertEmployeeResponse {
    pub message: String,
}
