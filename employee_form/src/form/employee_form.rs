use crate::form::change_handler::{handle_change, FieldChange};
use crate::form::dispatcher::dispatch;
use crate::form::notice::Notice;
use crate::form::snapshot::FormSnapshot;
use crate::form::validation::validate;
use employee_client::EmployeeApi;
use log::Level::Info;
use logging::jlog;
use validator::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmissionPhase {
    Editing,
    Submitting,
}

/// The employee form: owns the snapshot and the client used to submit it.
///
/// Nothing prevents `submit` from being called again after a failure or a
/// success; each call sends its own request.
pub struct EmployeeForm {
    snapshot: FormSnapshot,
    phase: SubmissionPhase,
    client: Box<dyn EmployeeApi + Send + Sync>,
}

impl EmployeeForm {
    pub fn new(client: Box<dyn EmployeeApi + Send + Sync>) -> EmployeeForm {
        EmployeeForm {
            snapshot: FormSnapshot::new(),
            phase: SubmissionPhase::Editing,
            client,
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn handle_change(&mut self, change: FieldChange) -> Option<Notice> {
        handle_change(&mut self.snapshot, change)
    }

    pub fn reset(&mut self) {
        self.snapshot.reset();
    }

    pub fn check(&self) -> Result<(), ValidationError> {
        validate(&self.snapshot)
    }

    /// Validates and, when the gate passes, posts the snapshot. The snapshot is
    /// cleared only when the server accepts the record.
    pub fn submit(&mut self) -> Notice {
        if let Err(validation_error) = self.check() {
            jlog!(Info, "Validation rejected submission", {
                "code": &validation_error.code,
                "field": validation_error.params.get("field")
            });
            return Notice::Invalid(validation_error);
        }

        self.phase = SubmissionPhase::Submitting;
        let result = dispatch(&*self.client, &self.snapshot);
        self.phase = SubmissionPhase::Editing;

        match result {
            Ok(response) => {
                self.reset();
                Notice::Submitted(response.message)
            }
            Err(err) => Notice::SubmitFailed(err.to_string()),
        }
    }
}
