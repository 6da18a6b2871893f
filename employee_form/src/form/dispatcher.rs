use crate::form::fields::Field;
use crate::form::snapshot::FormSnapshot;
use employee_client::{EmployeeApi, EmployeeApiError, InsertEmployeeResponse, MultipartPayload};
use log::Level::{Error, Info};
use logging::jlog;

/// Serializes a snapshot into the insert request body. Every text field is
/// sent, empty or not; the picture is sent when one is selected.
pub fn build_payload(snapshot: &FormSnapshot) -> MultipartPayload {
    let payload = Field::ALL
        .iter()
        .filter_map(|field| snapshot.text(*field).map(|value| (field.id(), value)))
        .fold(MultipartPayload::new(), |payload, (name, value)| payload.text(name, value));

    match &snapshot.picture {
        Some(picture) => payload.file(Field::Picture.id(), picture.clone()),
        None => payload,
    }
}

/// Sends one insert request for the snapshot. No retry is attempted.
pub fn dispatch(
    client: &(dyn EmployeeApi + Send + Sync),
    snapshot: &FormSnapshot,
) -> Result<InsertEmployeeResponse, EmployeeApiError> {
    let payload = build_payload(snapshot);
    jlog!(Info, "Submitting employee form", { "parts": payload.names() });

    match client.insert_employee(payload) {
        Ok(response) => {
            jlog!(Info, "Employee form accepted", { "message": &response.message });
            Ok(response)
        }
        Err(err) => {
            jlog!(Error, "Employee form submission failed", { "error": err.to_string() });
            Err(err)
        }
    }
}
