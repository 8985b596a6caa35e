//! List view
//!
//! Every record annotated with its list-view retirement date, a filter over
//! them and a gated delete. The visible rows are always derived from the
//! current records and filter, so a delete is reflected under any filter.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    ensure_deletable, is_upcoming_retirement, project_retirement_date, EmployeeRecord,
    EmployeeType,
};

use super::flash::{visible_text, Flash, FEEDBACK_TTL};
use super::transport::CrudApi;

/// Shown when no retirement date can be projected
pub const NO_DATA: &str = "no data";

/// Shown when the current filter matches nothing
pub const EMPTY_LIST: &str = "No employee data found.";

pub const DELETED_MESSAGE: &str = "Employee record Deleted!";

/// A record with its derived retirement date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEmployee {
    pub record: EmployeeRecord,
    pub retirement_date: Option<String>,
}

impl ListedEmployee {
    pub fn new(record: EmployeeRecord, today: NaiveDate) -> Self {
        let retirement_date = project_retirement_date(record.age, record.date_of_joining, today);
        Self {
            record,
            retirement_date,
        }
    }

    pub fn retirement_display(&self) -> &str {
        self.retirement_date.as_deref().unwrap_or(NO_DATA)
    }

    pub fn status_display(&self) -> &'static str {
        if self.record.is_employed() {
            "Employed"
        } else {
            "Not Employed"
        }
    }

    pub fn is_upcoming_retirement(&self) -> bool {
        self.retirement_date
            .as_deref()
            .map(is_upcoming_retirement)
            .unwrap_or(false)
    }
}

// =========================================================================
// Filter
// =========================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Type(EmployeeType),
    UpcomingRetirement,
}

impl ListFilter {
    /// Options in selector order
    pub fn options() -> Vec<ListFilter> {
        let mut options = vec![ListFilter::All];
        options.extend(EmployeeType::ALL.iter().copied().map(ListFilter::Type));
        options.push(ListFilter::UpcomingRetirement);
        options
    }

    /// Selector value
    pub fn value(&self) -> &'static str {
        match self {
            ListFilter::All => "All",
            ListFilter::Type(kind) => kind.as_str(),
            ListFilter::UpcomingRetirement => "UpcomingRetirement",
        }
    }

    /// Selector caption
    pub fn caption(&self) -> String {
        match self {
            ListFilter::All => "All Employees".to_string(),
            ListFilter::Type(kind) => format!("{} Employees", kind),
            ListFilter::UpcomingRetirement => "Upcoming Retirement".to_string(),
        }
    }

    /// Status line shown once the filter is chosen
    pub fn label(&self) -> String {
        format!("{} List", self.value())
    }

    pub fn matches(&self, employee: &ListedEmployee) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Type(kind) => employee.record.employee_type == *kind,
            ListFilter::UpcomingRetirement => employee.is_upcoming_retirement(),
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ListFilter {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(ListFilter::All),
            "UpcomingRetirement" => Ok(ListFilter::UpcomingRetirement),
            other => other.parse().map(ListFilter::Type),
        }
    }
}

// =========================================================================
// State
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub employees: Vec<ListedEmployee>,
    pub filter: ListFilter,
    pub loading: bool,
    /// Filter label or delete feedback
    pub status: Option<Flash>,
    /// Last failure, kept until the next one
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            filter: ListFilter::All,
            loading: true,
            status: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Loaded(Vec<ListedEmployee>),
    LoadFailed(String),
    FilterChanged { filter: ListFilter, at: Instant },
    DeleteRefused { at: Instant },
    Deleted { id: Uuid, at: Instant },
    DeleteFailed(String),
}

impl ListState {
    pub fn reduce(self, action: ListAction) -> Self {
        match action {
            ListAction::Loaded(employees) => Self {
                employees,
                loading: false,
                ..self
            },
            ListAction::LoadFailed(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
            ListAction::FilterChanged { filter, at } => Self {
                status: Some(Flash::sticky(filter.label(), at)),
                filter,
                ..self
            },
            ListAction::DeleteRefused { at } => Self {
                status: Some(Flash::transient(
                    crate::domain::DomainError::DeletionRefused.to_string(),
                    at,
                    FEEDBACK_TTL,
                )),
                ..self
            },
            ListAction::Deleted { id, at } => Self {
                employees: self
                    .employees
                    .into_iter()
                    .filter(|e| e.record.id != id)
                    .collect(),
                status: Some(Flash::transient(DELETED_MESSAGE, at, FEEDBACK_TTL)),
                ..self
            },
            ListAction::DeleteFailed(message) => Self {
                error: Some(message),
                ..self
            },
        }
    }

    /// Rows matching the current filter, in fetch order
    pub fn visible(&self) -> Vec<&ListedEmployee> {
        self.employees
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    pub fn status_text(&self, now: Instant) -> Option<&str> {
        visible_text(&self.status, now)
    }

    /// Placeholder shown instead of an empty table
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.visible().is_empty() {
            Some(EMPTY_LIST)
        } else {
            None
        }
    }
}

// =========================================================================
// Effects
// =========================================================================

/// On-mount effect: fetch every record and annotate it
pub async fn load_list<A: CrudApi + ?Sized>(api: &A, today: NaiveDate) -> ListAction {
    match api.employee_list().await {
        Ok(records) => ListAction::Loaded(
            records
                .into_iter()
                .map(|record| ListedEmployee::new(record, today))
                .collect(),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Error fetching employees");
            ListAction::LoadFailed(e.to_string())
        }
    }
}

/// Delete a record unless it is still employed.
///
/// A refused delete never reaches the API.
pub async fn delete_employee<A: CrudApi + ?Sized>(
    api: &A,
    employee: &EmployeeRecord,
    at: Instant,
) -> ListAction {
    if ensure_deletable(employee.current_status).is_err() {
        tracing::debug!(employee_id = %employee.id, "Delete refused for active employee");
        return ListAction::DeleteRefused { at };
    }

    match api.delete_employee(employee.id).await {
        Ok(_) => ListAction::Deleted {
            id: employee.id,
            at,
        },
        Err(e) => {
            tracing::warn!(employee_id = %employee.id, error = %e, "Error deleting employee");
            ListAction::DeleteFailed(e.to_string())
        }
    }
}
