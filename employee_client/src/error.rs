use reqwest::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum EmployeeApiError {
    #[snafu(display("Could not build HTTP client: {}", source))]
    ClientBuildError { source: reqwest::Error },
    #[snafu(display("Invalid employee api url {}: {}", url, source))]
    InvalidUrl { url: String, source: url::ParseError },
    #[snafu(display("Error occurred when calling {}: {}", url, source))]
    HttpError { url: String, source: reqwest::Error },
    #[snafu(display("Error reading HTTP response. Status: {}, Error: {}", status, source))]
    InvalidResponse { status: StatusCode, source: reqwest::Error },
    #[snafu(display("Could not deserialize response body: {}, Error: {}", body, source))]
    DeserializationError { body: String, source: serde_json::Error },
    #[snafu(display("Request failed with status code {}: {}", status.as_u16(), body))]
    ResponseError { status: StatusCode, body: String },
}
