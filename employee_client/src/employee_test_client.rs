use crate::employee_client::EmployeeApi;
use crate::error::{EmployeeApiError, ResponseError};
use crate::multipart::MultipartPayload;
use crate::response::InsertEmployeeResponse;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum TestOutcome {
    Message(String),
    Status { status: StatusCode, body: String },
}

/// In-memory stand-in for the employee service. Every payload it receives is
/// recorded, clones share the same record.
#[derive(Clone, Debug)]
pub struct EmployeeTestClient {
    requests: Arc<Mutex<Vec<MultipartPayload>>>,
    outcome: TestOutcome,
}

impl EmployeeTestClient {
    pub fn new() -> EmployeeTestClient {
        EmployeeTestClient::responding_with("Employee added")
    }

    pub fn responding_with<M: Into<String>>(message: M) -> EmployeeTestClient {
        EmployeeTestClient {
            requests: Arc::new(Mutex::new(Vec::new())),
            outcome: TestOutcome::Message(message.into()),
        }
    }

    pub fn failing_with<B: Into<String>>(status: StatusCode, body: B) -> EmployeeTestClient {
        EmployeeTestClient {
            requests: Arc::new(Mutex::new(Vec::new())),
            outcome: TestOutcome::Status {
                status,
                body: body.into(),
            },
        }
    }

    pub fn requests(&self) -> Vec<MultipartPayload> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for EmployeeTestClient {
    fn default() -> Self {
        EmployeeTestClient::new()
    }
}

impl EmployeeApi for EmployeeTestClient {
    fn insert_employee(&self, payload: MultipartPayload) -> Result<InsertEmployeeResponse, EmployeeApiError> {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(payload),
            Err(poisoned) => poisoned.into_inner().push(payload),
        }

        match &self.outcome {
            TestOutcome::Message(message) => Ok(InsertEmployeeResponse {
                message: message.clone(),
            }),
            TestOutcome::Status { status, body } => ResponseError {
                status: *status,
                body: body.clone(),
            }
            .fail(),
        }
    }

    fn box_clone(&self) -> Box<dyn EmployeeApi + Send + Sync> {
        Box::new((*self).clone())
    }
}
