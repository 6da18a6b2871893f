#![cfg_attr(not(debug_assertions), deny(unused_variables))]
#![cfg_attr(not(debug_assertions), deny(unused_imports))]
#![cfg_attr(not(debug_assertions), deny(dead_code))]
// Unused results is more often than not an error
#![deny(unused_must_use)]

pub const DEFAULT_BASE_URL: &str = "http://localhost:12799";
pub const INSERT_EMPLOYEE_PATH: &str = "employee/api/insertEmployee";

mod employee_client;
mod employee_test_client;
mod error;
mod multipart;
mod response;
mod util;

pub use employee_client::{EmployeeApi, HttpEmployeeClient};
pub use employee_test_client::{EmployeeTestClient, TestOutcome};
pub use error::EmployeeApiError;
pub use multipart::*;
pub use response::InsertEmployeeResponse;
pub use reqwest::StatusCode;
