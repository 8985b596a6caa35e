//! Edit view
//!
//! Only title, department and status are editable. A successful update
//! schedules navigation back to the list.

use std::time::Instant;

use uuid::Uuid;

use crate::domain::{Department, EmployeeRecord, EmployeeUpdate, Title};

use super::flash::{visible_text, Flash, NAVIGATION_DELAY};
use super::transport::CrudApi;

/// Route the view returns to after saving
pub const EMPLOYEES_ROUTE: &str = "/employees";

pub const UPDATED_MESSAGE: &str = "Record updated successfully!";

pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

/// The editable subset of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDraft {
    pub title: Title,
    pub department: Department,
    pub current_status: i32,
}

impl EditDraft {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            title: record.title,
            department: record.department,
            current_status: record.current_status,
        }
    }

    /// The draft as submitted: every editable field is sent
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            title: Some(self.title),
            department: Some(self.department),
            current_status: Some(self.current_status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(Title),
    Department(Department),
    CurrentStatus(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: Uuid,
    pub record: Option<EmployeeRecord>,
    pub draft: Option<EditDraft>,
    pub success: Option<Flash>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Loaded(EmployeeRecord),
    LoadFailed(String),
    Edit(DraftEdit),
    Updated { record: EmployeeRecord, at: Instant },
    UpdateFailed(String),
}

impl EditState {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            record: None,
            draft: None,
            success: None,
            error: None,
        }
    }

    pub fn reduce(self, action: EditAction) -> Self {
        match action {
            EditAction::Loaded(record) => Self {
                draft: Some(EditDraft::from_record(&record)),
                record: Some(record),
                error: None,
                ..self
            },
            EditAction::LoadFailed(message) | EditAction::UpdateFailed(message) => Self {
                error: Some(message),
                ..self
            },
            EditAction::Edit(edit) => {
                let draft = self.draft.map(|mut draft| {
                    match edit {
                        DraftEdit::Title(title) => draft.title = title,
                        DraftEdit::Department(department) => draft.department = department,
                        DraftEdit::CurrentStatus(status) => draft.current_status = status,
                    }
                    draft
                });
                Self { draft, ..self }
            }
            EditAction::Updated { record, at } => Self {
                draft: Some(EditDraft::from_record(&record)),
                record: Some(record),
                success: Some(Flash::transient(UPDATED_MESSAGE, at, NAVIGATION_DELAY)),
                error: None,
                ..self
            },
        }
    }

    pub fn success_text(&self, now: Instant) -> Option<&str> {
        visible_text(&self.success, now)
    }

    /// Route to navigate to once the post-update delay has passed
    pub fn redirect(&self, now: Instant) -> Option<&'static str> {
        match &self.success {
            Some(flash) if !flash.is_visible(now) => Some(EMPLOYEES_ROUTE),
            _ => None,
        }
    }
}

/// On-mount effect: fetch the record being edited
pub async fn load_edit<A: CrudApi + ?Sized>(api: &A, id: Uuid) -> EditAction {
    match api.employee(id).await {
        Ok(Some(record)) => EditAction::Loaded(record),
        Ok(None) => EditAction::LoadFailed(NOT_FOUND_MESSAGE.to_string()),
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "Error fetching employee");
            EditAction::LoadFailed(e.to_string())
        }
    }
}

/// Submit the draft as a permissive update
pub async fn submit_edit<A: CrudApi + ?Sized>(
    api: &A,
    id: Uuid,
    draft: &EditDraft,
    at: Instant,
) -> EditAction {
    match api.update_employee(id, &draft.to_update()).await {
        Ok(Some(record)) => EditAction::Updated { record, at },
        Ok(None) => EditAction::UpdateFailed(NOT_FOUND_MESSAGE.to_string()),
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "Error updating employee");
            EditAction::UpdateFailed(e.to_string())
        }
    }
}
