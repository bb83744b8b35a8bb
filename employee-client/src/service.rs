//! Employee API calls

use async_trait::async_trait;
use shared::models::{Employee, EmployeeInput};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

const BASE_PATH: &str = "employees";

/// The five employee operations
///
/// Lookups by id answer `Ok(None)` when the server has no such record.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Employee>>;
    async fn get(&self, id: &str) -> ClientResult<Option<Employee>>;
    async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee>;
    async fn replace(&self, id: &str, input: &EmployeeInput) -> ClientResult<Option<Employee>>;
    async fn delete(&self, id: &str) -> ClientResult<Option<Employee>>;
}

/// [`EmployeeService`] over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct EmployeeClient<H = NetworkHttpClient> {
    http: H,
}

impl EmployeeClient<NetworkHttpClient> {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_http(NetworkHttpClient::new(config)?))
    }
}

impl<H: HttpClient> EmployeeClient<H> {
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", BASE_PATH, id)
    }
}

#[async_trait]
impl<H: HttpClient> EmployeeService for EmployeeClient<H> {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        let employees: Option<Vec<Employee>> = self.http.get(BASE_PATH).await?;
        employees.ok_or_else(|| ClientError::InvalidResponse("Missing employee list".into()))
    }

    async fn get(&self, id: &str) -> ClientResult<Option<Employee>> {
        self.http.get(&Self::item_path(id)).await
    }

    async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        let created: Option<Employee> = self.http.post(BASE_PATH, input).await?;
        created.ok_or_else(|| ClientError::InvalidResponse("Missing created employee".into()))
    }

    async fn replace(&self, id: &str, input: &EmployeeInput) -> ClientResult<Option<Employee>> {
        self.http.put(&Self::item_path(id), input).await
    }

    async fn delete(&self, id: &str) -> ClientResult<Option<Employee>> {
        self.http.delete(&Self::item_path(id)).await
    }
}
