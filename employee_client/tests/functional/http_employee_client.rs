use employee_client::{EmployeeApi, EmployeeApiError, HttpEmployeeClient};
use mockito::Matcher;
use crate::support;

const PATH: &str = "/employee/api/insertEmployee";

fn part(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(r#"name="{}"\r\n\r\n{}\r\n"#, name, value))
}

#[test]
pub fn insert_employee_posts_every_part() {
    let mut server = mockito::Server::new();
    let m = server
        .mock("POST", PATH)
        .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".to_string()))
        .match_body(Matcher::AllOf(vec![
            part("first_name", "Ada"),
            part("middle_name", ""),
            part("last_name", "Lovelace"),
            part("email", "ada@example.com"),
            part("phone", "09171234567"),
            Matcher::Regex(r#"name="picture"; filename="ada.png""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Employee added"}"#)
        .expect(1)
        .create();

    let client = HttpEmployeeClient::new(&server.url()).unwrap();
    let response = client.insert_employee(support::employee_payload("")).unwrap();

    assert_eq!("Employee added", response.message);
    m.assert();
}

#[test]
pub fn insert_employee_reports_error_status() {
    let mut server = mockito::Server::new();
    let m = server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("database unavailable")
        .expect(1)
        .create();

    let client = HttpEmployeeClient::new(&server.url()).unwrap();
    let err = client.insert_employee(support::employee_payload("Augusta")).unwrap_err();

    match err {
        EmployeeApiError::ResponseError { status, body } => {
            assert_eq!(500, status.as_u16());
            assert_eq!("database unavailable", body);
        }
        other => panic!("Unexpected error: {}", other),
    }
    m.assert();
}

#[test]
pub fn insert_employee_rejects_unreadable_success_body() {
    let mut server = mockito::Server::new();
    let _m = server.mock("POST", PATH).with_status(200).with_body("ok").create();

    let client = HttpEmployeeClient::new(&server.url()).unwrap();
    let err = client.insert_employee(support::employee_payload("")).unwrap_err();

    match err {
        EmployeeApiError::DeserializationError { body, .. } => assert_eq!("ok", body),
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
pub fn insert_employee_reports_transport_failure() {
    // Nothing listens on the discard port.
    let client = HttpEmployeeClient::new("http://127.0.0.1:9").unwrap();
    let err = client.insert_employee(support::employee_payload("")).unwrap_err();

    match err {
        EmployeeApiError::HttpError { url, .. } => {
            assert_eq!("http://127.0.0.1:9/employee/api/insertEmployee", url)
        }
        other => panic!("Unexpected error: {}", other),
    }
}
