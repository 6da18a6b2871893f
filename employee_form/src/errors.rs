use employee_client::EmployeeApiError;
use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum ApplicationError {
    #[snafu(display("Environment '{}' is invalid, expected development, test or production", value))]
    EnvironmentError { value: String },
    #[snafu(display("Unknown field '{}'", id))]
    UnknownField { id: String },
    #[snafu(display("Field '{}' does not take text input", field))]
    NotATextField { field: String },
    #[snafu(display("Could not read picture {}: {}", path.display(), source))]
    PictureReadError { path: PathBuf, source: std::io::Error },
    #[snafu(display("Could not create employee api client: {}", source))]
    ClientError { source: EmployeeApiError },
}
