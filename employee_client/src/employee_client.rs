use crate::error::*;
use crate::multipart::MultipartPayload;
use crate::response::InsertEmployeeResponse;
use crate::util::HttpResponseExt;
use crate::INSERT_EMPLOYEE_PATH;
use log::Level::Info;
use logging::jlog;
use reqwest::blocking::Client;
use snafu::ResultExt;
use std::time::Duration;
use url::Url;

/// The collaborator that persists employee records.
pub trait EmployeeApi {
    /// Sends one insert request. Implementations never retry.
    fn insert_employee(&self, payload: MultipartPayload) -> Result<InsertEmployeeResponse, EmployeeApiError>;

    fn box_clone(&self) -> Box<dyn EmployeeApi + Send + Sync>;
}

impl Clone for Box<dyn EmployeeApi + Send + Sync> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

#[derive(Clone, Debug)]
pub struct HttpEmployeeClient {
    endpoint: Url,
    client: Client,
}

impl HttpEmployeeClient {
    /// base_url: scheme, host and port of the employee service, e.g. http://localhost:12799
    pub fn new(base_url: &str) -> Result<HttpEmployeeClient, EmployeeApiError> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let endpoint = Url::parse(&base)
            .and_then(|url| url.join(INSERT_EMPLOYEE_PATH))
            .context(InvalidUrl { url: base_url })?;
        // No timeout: the request waits for as long as the server does.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context(ClientBuildError)?;

        Ok(HttpEmployeeClient { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EmployeeApi for HttpEmployeeClient {
    fn insert_employee(&self, payload: MultipartPayload) -> Result<InsertEmployeeResponse, EmployeeApiError> {
        let url = self.endpoint.to_string();
        jlog!(Info, "employee_client", "Posting employee record", {
            "url": &url,
            "parts": payload.names()
        });

        let resp = self
            .client
            .post(self.endpoint.clone())
            .multipart(payload.into_form())
            .send()
            .context(HttpError { url })?;

        resp.json_or_error()
    }

    fn box_clone(&self) -> Box<dyn EmployeeApi + Send + Sync> {
        Box::new((*self).clone())
    }
}
