use crate::errors::*;
use dotenv::dotenv;
use employee_client::{EmployeeApi, EmployeeTestClient, HttpEmployeeClient, DEFAULT_BASE_URL};
use snafu::ResultExt;
use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl FromStr for Environment {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => EnvironmentError { value: s }.fail(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub api_url: String,
    pub log_level: String,
}

const ENVIRONMENT: &str = "ENVIRONMENT";
const EMPLOYEE_API_URL: &str = "EMPLOYEE_API_URL";
const LOG_LEVEL: &str = "LOG_LEVEL";
// Selects the in-memory client instead of the HTTP one
const TEST_API_URL: &str = "TEST";

impl Config {
    pub fn parse_environment() -> Result<Environment, ApplicationError> {
        dotenv().ok();
        match env::var(&ENVIRONMENT) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Environment::Development),
        }
    }

    pub fn new(environment: Environment) -> Config {
        dotenv().ok();

        let api_url = env::var(&EMPLOYEE_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var(&LOG_LEVEL).unwrap_or_else(|_| "info".to_string());

        Config {
            environment,
            api_url,
            log_level,
        }
    }

    pub fn uses_test_client(&self) -> bool {
        self.environment == Environment::Test || self.api_url == TEST_API_URL
    }

    pub fn api_client(&self) -> Result<Box<dyn EmployeeApi + Send + Sync>, ApplicationError> {
        if self.uses_test_client() {
            Ok(Box::new(EmployeeTestClient::new()))
        } else {
            let client = HttpEmployeeClient::new(&self.api_url).context(ClientError)?;
            Ok(Box::new(client))
        }
    }
}
