use crate::support;
use employee_client::{EmployeeTestClient, PartValue, StatusCode};
use employee_form::*;

fn filled_form(client: &EmployeeTestClient) -> EmployeeForm {
    let mut form = EmployeeForm::new(Box::new(client.clone()));
    for change in support::valid_changes() {
        assert_eq!(None, form.handle_change(change));
    }
    form
}

#[test]
pub fn successful_submission_resets_form() {
    let client = EmployeeTestClient::responding_with("Employee added");
    let mut form = filled_form(&client);

    let notice = form.submit();

    assert_eq!(Notice::Submitted("Employee added".to_string()), notice);
    assert_eq!("Employee added", notice.to_string());
    assert!(form.snapshot().is_empty());
    assert!(!form.snapshot().has_picture());
    assert_eq!(SubmissionPhase::Editing, form.phase());

    let requests = client.requests();
    assert_eq!(1, requests.len());
    assert_eq!(
        vec!["first_name", "middle_name", "last_name", "email", "phone", "picture"],
        requests[0].names()
    );
    assert_eq!(Some(&PartValue::Text(String::new())), requests[0].get("middle_name"));
    assert_eq!(Some(&PartValue::File(support::picture())), requests[0].get("picture"));
}

#[test]
pub fn failed_submission_keeps_form() {
    let client = EmployeeTestClient::failing_with(StatusCode::INTERNAL_SERVER_ERROR, "duplicate email");
    let mut form = filled_form(&client);

    let notice = form.submit();

    assert!(notice.is_failure());
    assert_eq!(
        "Error submitting form data: Request failed with status code 500: duplicate email",
        notice.to_string()
    );
    assert_eq!(&support::valid_snapshot(), form.snapshot());
    assert_eq!(SubmissionPhase::Editing, form.phase());

    // The same record can be sent again as is.
    form.submit();
    assert_eq!(2, client.requests().len());
}

#[test]
pub fn invalid_form_is_never_sent() {
    let client = EmployeeTestClient::new();
    let mut form = EmployeeForm::new(Box::new(client.clone()));
    form.handle_change(FieldChange::FirstName("Ada".to_string()));
    form.handle_change(FieldChange::LastName("Lovelace".to_string()));
    form.handle_change(FieldChange::Email("ada.example.com".to_string()));
    form.handle_change(FieldChange::Phone("0917".to_string()));
    let before = form.snapshot().clone();

    match form.submit() {
        Notice::Invalid(err) => assert_eq!(EMAIL_CODE, err.code),
        other => panic!("Unexpected notice: {:?}", other),
    }
    assert_eq!(&before, form.snapshot());
    assert!(client.requests().is_empty());
}

#[test]
pub fn missing_picture_is_never_sent() {
    let client = EmployeeTestClient::new();
    let mut form = filled_form(&client);
    form.handle_change(FieldChange::Picture(Vec::new()));

    assert_eq!("Please Input File", form.submit().to_string());
    assert!(client.requests().is_empty());
}

#[test]
pub fn double_submit_sends_two_requests() {
    let client = EmployeeTestClient::failing_with(StatusCode::BAD_GATEWAY, "");
    let mut form = filled_form(&client);

    form.submit();
    form.submit();

    assert_eq!(2, client.requests().len());
    assert_eq!(client.requests()[0], client.requests()[1]);
}

#[test]
pub fn reset_clears_picture_selection() {
    let mut form = filled_form(&EmployeeTestClient::new());
    assert!(form.check().is_ok());

    form.reset();

    assert!(form.snapshot().is_empty());
    assert_eq!(REQUIRED_CODE, form.check().unwrap_err().code);
}
