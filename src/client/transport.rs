//! GraphQL transport
//!
//! [`CrudApi`] is the contract every view talks to. [`GraphQlClient`]
//! implements it over HTTP, always passing arguments as GraphQL variables.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::{EmployeeRecord, EmployeeUpdate, NewEmployee};

use super::error::ClientError;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

const EMPLOYEE_FIELDS: &str =
    "id firstName lastName age dateOfJoining title department employeeType currentStatus";

/// Client side of the CRUD contract
#[async_trait]
pub trait CrudApi: Send + Sync {
    async fn employee_list(&self) -> Result<Vec<EmployeeRecord>, ClientError>;

    async fn employee(&self, id: Uuid) -> Result<Option<EmployeeRecord>, ClientError>;

    async fn create_employee(&self, input: &NewEmployee) -> Result<EmployeeRecord, ClientError>;

    async fn update_employee(
        &self,
        id: Uuid,
        input: &EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, ClientError>;

    /// Returns the deleted record's id, `None` if it was already gone
    async fn delete_employee(&self, id: Uuid) -> Result<Option<Uuid>, ClientError>;
}

// =========================================================================
// Response envelope
// =========================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

impl<T> GraphQlResponse<T> {
    fn into_result(self) -> Result<T, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| ClientError::UnexpectedResponse("missing data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeListData {
    employee_list: Vec<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
struct EmployeeData {
    employee: Option<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateData {
    create_employee: Option<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateData {
    update_employee: Option<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteData {
    delete_employee: Option<DeletedId>,
}

#[derive(Debug, Deserialize)]
struct DeletedId {
    id: Uuid,
}

// =========================================================================
// HTTP client
// =========================================================================

/// [`CrudApi`] over HTTP
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_http_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation and unwrap the `{data, errors}` envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: GraphQlResponse<T> = response.json().await?;
        body.into_result()
    }
}

impl Default for GraphQlClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CrudApi for GraphQlClient {
    async fn employee_list(&self) -> Result<Vec<EmployeeRecord>, ClientError> {
        let query = format!("query List {{ employeeList {{ {} }} }}", EMPLOYEE_FIELDS);
        let data: EmployeeListData = self.execute(&query, json!({})).await?;
        Ok(data.employee_list)
    }

    async fn employee(&self, id: Uuid) -> Result<Option<EmployeeRecord>, ClientError> {
        let query = format!(
            "query One($id: ID!) {{ employee(id: $id) {{ {} }} }}",
            EMPLOYEE_FIELDS
        );
        let data: EmployeeData = self.execute(&query, json!({ "id": id })).await?;
        Ok(data.employee)
    }

    async fn create_employee(&self, input: &NewEmployee) -> Result<EmployeeRecord, ClientError> {
        let query = format!(
            "mutation Create($input: EmployeeInput!) {{ createEmployee(employeeInput: $input) {{ {} }} }}",
            EMPLOYEE_FIELDS
        );
        let data: CreateData = self.execute(&query, json!({ "input": input })).await?;
        data.create_employee
            .ok_or_else(|| ClientError::UnexpectedResponse("createEmployee returned null".to_string()))
    }

    async fn update_employee(
        &self,
        id: Uuid,
        input: &EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, ClientError> {
        let query = format!(
            "mutation Update($id: ID!, $input: EmployeeUpdateInput) {{ updateEmployee(id: $id, employeeUpdateInput: $input) {{ {} }} }}",
            EMPLOYEE_FIELDS
        );
        let data: UpdateData = self
            .execute(&query, json!({ "id": id, "input": input }))
            .await?;
        Ok(data.update_employee)
    }

    async fn delete_employee(&self, id: Uuid) -> Result<Option<Uuid>, ClientError> {
        let query = "mutation Delete($id: ID!) { deleteEmployee(id: $id) { id } }";
        let data: DeleteData = self.execute(query, json!({ "id": id })).await?;
        Ok(data.delete_employee.map(|deleted| deleted.id))
    }
}
