use crate::error::{DeserializationError, EmployeeApiError, InvalidResponse, ResponseError};
use log::Level::Debug;
use logging::jlog;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

pub(crate) trait HttpResponseExt {
    fn json_or_error<T: DeserializeOwned>(self) -> Result<T, EmployeeApiError>;
}

impl HttpResponseExt for reqwest::blocking::Response {
    fn json_or_error<T: DeserializeOwned>(self) -> Result<T, EmployeeApiError> {
        let status = self.status();
        let body = self.text().context(InvalidResponse { status })?;
        jlog!(Debug, "employee_client", "Response from employee api", {
            "status": status.as_u16(),
            "length": body.len()
        });
        if !status.is_success() {
            return ResponseError { status, body }.fail();
        }
        let result: T = serde_json::from_str(&body).context(DeserializationError { body })?;
        Ok(result)
    }
}
