//! GraphQL Schema
//!
//! The CRUD contract: `employeeList`, `employee`, `createEmployee`,
//! `updateEmployee` and `deleteEmployee`. Field and argument names are the
//! wire contract. Vocabularies and dates travel as strings and are parsed
//! before the store is touched.

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject, ID};
use uuid::Uuid;

use crate::domain::{
    parse_date, DomainError, EmployeeRecord, EmployeeUpdate, NewEmployee, DATE_FORMAT,
};
use crate::error::AppResult;
use crate::store::SharedStore;

use super::context::RequestContext;

pub type EmployeeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a record store
pub fn build_schema(store: SharedStore) -> EmployeeSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

// =========================================================================
// Wire types
// =========================================================================

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Employee")]
pub struct EmployeeObject {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: String,
    pub title: String,
    pub department: String,
    pub employee_type: String,
    pub current_status: i32,
}

impl From<EmployeeRecord> for EmployeeObject {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            first_name: record.first_name,
            last_name: record.last_name,
            age: record.age,
            date_of_joining: record.date_of_joining.format(DATE_FORMAT).to_string(),
            title: record.title.to_string(),
            department: record.department.to_string(),
            employee_type: record.employee_type.to_string(),
            current_status: record.current_status,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: String,
    pub title: String,
    pub department: String,
    pub employee_type: String,
    pub current_status: Option<i32>,
}

impl TryFrom<EmployeeInput> for NewEmployee {
    type Error = DomainError;

    fn try_from(input: EmployeeInput) -> Result<Self, Self::Error> {
        Ok(NewEmployee {
            date_of_joining: parse_date(&input.date_of_joining)?,
            title: input.title.parse()?,
            department: input.department.parse()?,
            employee_type: input.employee_type.parse()?,
            first_name: input.first_name,
            last_name: input.last_name,
            age: input.age,
            current_status: input.current_status,
        })
    }
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct EmployeeUpdateInput {
    pub title: Option<String>,
    pub department: Option<String>,
    pub current_status: Option<i32>,
}

impl TryFrom<EmployeeUpdateInput> for EmployeeUpdate {
    type Error = DomainError;

    fn try_from(input: EmployeeUpdateInput) -> Result<Self, Self::Error> {
        Ok(EmployeeUpdate {
            title: input.title.map(|t| t.parse()).transpose()?,
            department: input.department.map(|d| d.parse()).transpose()?,
            current_status: input.current_status,
        })
    }
}

fn parse_id(id: &ID) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id.as_str()).map_err(|_| DomainError::InvalidId(id.to_string()))
}

fn correlation_id(ctx: &Context<'_>) -> Option<Uuid> {
    ctx.data_opt::<RequestContext>()
        .and_then(|context| context.correlation_id)
}

// =========================================================================
// Query
// =========================================================================

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All employee records
    async fn employee_list(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<EmployeeObject>> {
        let store = ctx.data::<SharedStore>()?;
        list_employees(store)
            .await
            .map_err(|e| e.into_graphql("Error fetching employees"))
    }

    /// One employee record, or null if the id is unknown
    async fn employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<EmployeeObject>> {
        let store = ctx.data::<SharedStore>()?;
        find_employee(store, &id)
            .await
            .map_err(|e| e.into_graphql("Error fetching employee"))
    }
}

async fn list_employees(store: &SharedStore) -> AppResult<Vec<EmployeeObject>> {
    let records = store.list_all().await?;
    Ok(records.into_iter().map(EmployeeObject::from).collect())
}

async fn find_employee(store: &SharedStore, id: &ID) -> AppResult<Option<EmployeeObject>> {
    let id = parse_id(id)?;
    Ok(store.find_by_id(id).await?.map(EmployeeObject::from))
}

// =========================================================================
// Mutation
// =========================================================================

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a record. `currentStatus` defaults to employed.
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        employee_input: Option<EmployeeInput>,
    ) -> async_graphql::Result<Option<EmployeeObject>> {
        let store = ctx.data::<SharedStore>()?;
        let record = create(store, employee_input)
            .await
            .map_err(|e| e.into_graphql("Error creating employee"))?;

        tracing::info!(
            employee_id = %record.id.as_str(),
            correlation_id = ?correlation_id(ctx),
            "Employee created"
        );
        Ok(Some(record))
    }

    /// Update title, department and/or status. Null if the id is unknown.
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        employee_update_input: Option<EmployeeUpdateInput>,
    ) -> async_graphql::Result<Option<EmployeeObject>> {
        let store = ctx.data::<SharedStore>()?;
        let record = update(store, &id, employee_update_input.unwrap_or_default())
            .await
            .map_err(|e| e.into_graphql("Error updating employee"))?;

        tracing::info!(
            employee_id = %id.as_str(),
            found = record.is_some(),
            correlation_id = ?correlation_id(ctx),
            "Employee updated"
        );
        Ok(record)
    }

    /// Delete a record, returning it. Null if the id is unknown.
    ///
    /// No status check happens here; callers gate deletion themselves.
    async fn delete_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<EmployeeObject>> {
        let store = ctx.data::<SharedStore>()?;
        let record = delete(store, &id)
            .await
            .map_err(|e| e.into_graphql("Error deleting employee"))?;

        tracing::info!(
            employee_id = %id.as_str(),
            found = record.is_some(),
            correlation_id = ?correlation_id(ctx),
            "Employee deleted"
        );
        Ok(record)
    }
}

async fn create(store: &SharedStore, input: Option<EmployeeInput>) -> AppResult<EmployeeObject> {
    let input = input.ok_or(DomainError::MissingInput("employeeInput"))?;
    let new = NewEmployee::try_from(input)?;
    Ok(store.insert(new).await?.into())
}

async fn update(
    store: &SharedStore,
    id: &ID,
    input: EmployeeUpdateInput,
) -> AppResult<Option<EmployeeObject>> {
    let id = parse_id(id)?;
    let update = EmployeeUpdate::try_from(input)?;
    Ok(store.update(id, update).await?.map(EmployeeObject::from))
}

async fn delete(store: &SharedStore, id: &ID) -> AppResult<Option<EmployeeObject>> {
    let id = parse_id(id)?;
    Ok(store.delete(id).await?.map(EmployeeObject::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_graphql::{Request, Variables};
    use serde_json::{json, Value};

    use crate::store::MemoryRecordStore;

    fn schema() -> EmployeeSchema {
        build_schema(Arc::new(MemoryRecordStore::new()))
    }

    async fn run(schema: &EmployeeSchema, query: &str, variables: Value) -> (Value, Vec<String>) {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        let errors = response.errors.iter().map(|e| e.message.clone()).collect();
        (response.data.into_json().unwrap(), errors)
    }

    const CREATE: &str = r#"
        mutation Create($input: EmployeeInput!) {
            createEmployee(employeeInput: $input) {
                id firstName lastName age dateOfJoining title department employeeType currentStatus
            }
        }
    "#;

    fn input() -> Value {
        json!({
            "firstName": "Linus",
            "lastName": "Pauling",
            "age": 42,
            "dateOfJoining": "2027-04-01",
            "title": "Manager",
            "department": "HR",
            "employeeType": "Seasonal"
        })
    }

    #[test]
    fn test_sdl_exposes_wire_contract() {
        let sdl = schema().sdl();

        assert!(sdl.contains("employeeList: [Employee!]!"));
        assert!(sdl.contains("employee(id: ID!): Employee"));
        assert!(sdl.contains("createEmployee(employeeInput: EmployeeInput): Employee\n"));
        assert!(sdl.contains("updateEmployee("));
        assert!(sdl.contains("employeeUpdateInput: EmployeeUpdateInput"));
        assert!(sdl.contains("deleteEmployee(id: ID!): Employee"));
        assert!(sdl.contains("currentStatus: Int"));
    }

    #[tokio::test]
    async fn test_create_defaults_status_and_echoes_fields() {
        let schema = schema();
        let (data, errors) = run(&schema, CREATE, json!({ "input": input() })).await;

        assert!(errors.is_empty(), "{:?}", errors);
        let created = &data["createEmployee"];
        assert_eq!(created["firstName"], "Linus");
        assert_eq!(created["dateOfJoining"], "2027-04-01");
        assert_eq!(created["employeeType"], "Seasonal");
        assert_eq!(created["currentStatus"], 1);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_vocabulary() {
        let schema = schema();
        let mut bad = input();
        bad["title"] = json!("Intern");

        let (data, errors) = run(&schema, CREATE, json!({ "input": bad })).await;

        assert_eq!(data, json!({ "createEmployee": null }));
        assert_eq!(errors, vec!["Unknown title: Intern".to_string()]);
    }

    #[tokio::test]
    async fn test_create_without_input_is_an_error() {
        let schema = schema();
        let (data, errors) = run(
            &schema,
            "mutation { createEmployee { id } }",
            json!({}),
        )
        .await;

        assert_eq!(data, json!({ "createEmployee": null }));
        assert_eq!(
            errors,
            vec!["Missing required input: employeeInput".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_id_resolves_to_null() {
        let schema = schema();
        let id = Uuid::new_v4().to_string();

        let (data, errors) = run(
            &schema,
            "query One($id: ID!) { employee(id: $id) { id } }",
            json!({ "id": id }),
        )
        .await;
        assert!(errors.is_empty());
        assert_eq!(data["employee"], Value::Null);

        let (data, errors) = run(
            &schema,
            "mutation Del($id: ID!) { deleteEmployee(id: $id) { id } }",
            json!({ "id": id }),
        )
        .await;
        assert!(errors.is_empty());
        assert_eq!(data["deleteEmployee"], Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_id_is_an_error() {
        let schema = schema();
        let (_, errors) = run(
            &schema,
            "query One($id: ID!) { employee(id: $id) { id } }",
            json!({ "id": "64f0c2a9e1" }),
        )
        .await;

        assert_eq!(errors, vec!["Invalid employee id: 64f0c2a9e1".to_string()]);
    }

    #[tokio::test]
    async fn test_update_only_touches_given_fields() {
        let schema = schema();
        let (data, _) = run(&schema, CREATE, json!({ "input": input() })).await;
        let id = data["createEmployee"]["id"].as_str().unwrap().to_string();

        let (data, errors) = run(
            &schema,
            r#"
            mutation Up($id: ID!, $input: EmployeeUpdateInput) {
                updateEmployee(id: $id, employeeUpdateInput: $input) {
                    id title department employeeType currentStatus
                }
            }
            "#,
            json!({ "id": id, "input": { "currentStatus": 0 } }),
        )
        .await;

        assert!(errors.is_empty(), "{:?}", errors);
        let updated = &data["updateEmployee"];
        assert_eq!(updated["currentStatus"], 0);
        assert_eq!(updated["title"], "Manager");
        assert_eq!(updated["department"], "HR");
        assert_eq!(updated["employeeType"], "Seasonal");
    }
}
