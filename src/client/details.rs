//! Details view: one record with its retirement breakdown

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{project_retirement, EmployeeRecord, RetirementProjection};

use super::list::NO_DATA;
use super::transport::CrudApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub record: EmployeeRecord,
    pub retirement: Option<RetirementProjection>,
}

impl EmployeeDetails {
    pub fn new(record: EmployeeRecord, today: NaiveDate) -> Self {
        let retirement = project_retirement(record.age, record.date_of_joining, today);
        Self { record, retirement }
    }

    /// `"<y> Year(s), <m> Month(s) & <d> Day(s)"`
    pub fn retirement_display(&self) -> String {
        self.retirement
            .map(|projection| projection.to_string())
            .unwrap_or_else(|| NO_DATA.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailsState {
    #[default]
    Loading,
    Loaded(EmployeeDetails),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsAction {
    Loaded(EmployeeDetails),
    NotFound,
    LoadFailed(String),
}

impl DetailsState {
    pub fn reduce(self, action: DetailsAction) -> Self {
        match action {
            DetailsAction::Loaded(details) => DetailsState::Loaded(details),
            DetailsAction::NotFound => DetailsState::NotFound,
            DetailsAction::LoadFailed(message) => DetailsState::Failed(message),
        }
    }
}

/// On-mount effect: fetch the record named by the route
pub async fn load_details<A: CrudApi + ?Sized>(
    api: &A,
    id: Uuid,
    today: NaiveDate,
) -> DetailsAction {
    match api.employee(id).await {
        Ok(Some(record)) => DetailsAction::Loaded(EmployeeDetails::new(record, today)),
        Ok(None) => DetailsAction::NotFound,
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "Error fetching employee");
            DetailsAction::LoadFailed(e.to_string())
        }
    }
}
