//! PostgreSQL Record Store
//!
//! One `employees` table; vocabularies are stored as their wire names.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{DomainError, EmployeeRecord, EmployeeUpdate, NewEmployee, STATUS_EMPLOYED};

use super::{RecordStore, StoreError};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, age, date_of_joining, title, \
                                department, employee_type, current_status";

/// Row as stored in the `employees` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    age: i32,
    date_of_joining: NaiveDate,
    title: String,
    department: String,
    employee_type: String,
    current_status: i32,
}

impl TryFrom<EmployeeRow> for EmployeeRecord {
    type Error = StoreError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |source: DomainError| StoreError::CorruptRecord { id, source };

        Ok(EmployeeRecord {
            id: row.id,
            title: row.title.parse().map_err(corrupt)?,
            department: row.department.parse().map_err(corrupt)?,
            employee_type: row.employee_type.parse().map_err(corrupt)?,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            date_of_joining: row.date_of_joining,
            current_status: row.current_status,
        })
    }
}

/// Record store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Create a new PgRecordStore with a database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_all(&self) -> Result<Vec<EmployeeRecord>, StoreError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM employees ORDER BY created_at ASC, id ASC",
            EMPLOYEE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EmployeeRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "SELECT {} FROM employees WHERE id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmployeeRecord::try_from).transpose()
    }

    async fn insert(&self, new: NewEmployee) -> Result<EmployeeRecord, StoreError> {
        let id = Uuid::new_v4();

        let row: EmployeeRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO employees
                (id, first_name, last_name, age, date_of_joining, title,
                 department, employee_type, current_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(new.age)
        .bind(new.date_of_joining)
        .bind(new.title.as_str())
        .bind(new.department.as_str())
        .bind(new.employee_type.as_str())
        .bind(new.current_status.unwrap_or(STATUS_EMPLOYED))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Employee record {} inserted", id);

        row.try_into()
    }

    async fn update(
        &self,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, StoreError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            r#"
            UPDATE employees
            SET
                title = COALESCE($2, title),
                department = COALESCE($3, department),
                current_status = COALESCE($4, current_status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .bind(update.title.map(|t| t.as_str()))
        .bind(update.department.map(|d| d.as_str()))
        .bind(update.current_status)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmployeeRecord::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<Option<EmployeeRecord>, StoreError> {
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "DELETE FROM employees WHERE id = $1 RETURNING {}",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmployeeRecord::try_from).transpose()
    }

    async fn health(&self) -> Result<(), StoreError> {
        crate::db::verify_connection(&self.pool).await?;
        Ok(())
    }
}
