//! Dashboard view: directory head counts

use crate::domain::{EmployeeRecord, EmployeeType};

use super::transport::CrudApi;

/// Total head count and a count per contract kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    pub total: usize,
    /// One entry per [`EmployeeType`], in [`EmployeeType::ALL`] order
    pub by_type: Vec<(EmployeeType, usize)>,
}

impl DirectorySummary {
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let by_type = EmployeeType::ALL
            .iter()
            .map(|kind| {
                let count = records.iter().filter(|r| r.employee_type == *kind).count();
                (*kind, count)
            })
            .collect();

        Self {
            total: records.len(),
            by_type,
        }
    }

    pub fn count(&self, kind: EmployeeType) -> usize {
        self.by_type
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(DirectorySummary),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Loaded(Vec<EmployeeRecord>),
    LoadFailed(String),
}

impl DashboardState {
    pub fn reduce(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::Loaded(records) => {
                DashboardState::Loaded(DirectorySummary::from_records(&records))
            }
            DashboardAction::LoadFailed(message) => DashboardState::Failed(message),
        }
    }
}

/// On-mount effect: fetch every record
pub async fn load_dashboard<A: CrudApi + ?Sized>(api: &A) -> DashboardAction {
    match api.employee_list().await {
        Ok(records) => DashboardAction::Loaded(records),
        Err(e) => {
            tracing::warn!(error = %e, "Error fetching employees");
            DashboardAction::LoadFailed(e.to_string())
        }
    }
}
