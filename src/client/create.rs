//! Create view
//!
//! Form state with per-field errors. Editing a field clears only that
//! field's error; the whole form is validated again on submit.

use std::time::Instant;

use chrono::NaiveDate;

use crate::domain::{
    validate_new_employee, Department, EmployeeForm, EmployeeRecord, EmployeeType, Field, Title,
    ValidationErrors,
};

use super::flash::{visible_text, Flash, FEEDBACK_TTL};
use super::transport::CrudApi;

pub const CREATED_MESSAGE: &str = "Employee record added successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateState {
    pub form: EmployeeForm,
    pub errors: ValidationErrors,
    pub message: Option<Flash>,
}

/// One edit to the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    FirstName(String),
    LastName(String),
    Age(String),
    DateOfJoining(String),
    Title(Title),
    Department(Department),
    EmployeeType(EmployeeType),
    CurrentStatus(i32),
}

impl FormEdit {
    /// Validated field this edit touches, if any
    fn field(&self) -> Option<Field> {
        match self {
            FormEdit::FirstName(_) => Some(Field::FirstName),
            FormEdit::LastName(_) => Some(Field::LastName),
            FormEdit::Age(_) => Some(Field::Age),
            FormEdit::DateOfJoining(_) => Some(Field::DateOfJoining),
            _ => None,
        }
    }

    fn apply(self, form: &mut EmployeeForm) {
        match self {
            FormEdit::FirstName(value) => form.first_name = value,
            FormEdit::LastName(value) => form.last_name = value,
            FormEdit::Age(value) => form.age = value,
            FormEdit::DateOfJoining(value) => form.date_of_joining = value,
            FormEdit::Title(value) => form.title = value,
            FormEdit::Department(value) => form.department = value,
            FormEdit::EmployeeType(value) => form.employee_type = value,
            FormEdit::CurrentStatus(value) => form.current_status = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateAction {
    Edit(FormEdit),
    Invalid(ValidationErrors),
    Created { record: EmployeeRecord, at: Instant },
    Failed { message: String, at: Instant },
}

impl CreateState {
    pub fn reduce(self, action: CreateAction) -> Self {
        match action {
            CreateAction::Edit(edit) => {
                let mut form = self.form;
                let mut errors = self.errors;
                if let Some(field) = edit.field() {
                    errors.clear(field);
                }
                edit.apply(&mut form);
                Self {
                    form,
                    errors,
                    ..self
                }
            }
            CreateAction::Invalid(errors) => Self { errors, ..self },
            CreateAction::Created { at, .. } => Self {
                form: EmployeeForm::default(),
                errors: ValidationErrors::new(),
                message: Some(Flash::transient(CREATED_MESSAGE, at, FEEDBACK_TTL)),
            },
            CreateAction::Failed { message, at } => Self {
                message: Some(Flash::sticky(
                    format!("Error creating employee: {}", message),
                    at,
                )),
                ..self
            },
        }
    }

    pub fn message_text(&self, now: Instant) -> Option<&str> {
        visible_text(&self.message, now)
    }
}

/// Validate the form and, if it passes, create the record.
///
/// An invalid form never reaches the API.
pub async fn submit_create<A: CrudApi + ?Sized>(
    api: &A,
    form: &EmployeeForm,
    today: NaiveDate,
    at: Instant,
) -> CreateAction {
    let new = match validate_new_employee(form, today) {
        Ok(new) => new,
        Err(errors) => {
            tracing::debug!(errors = %errors, "Form is not valid");
            return CreateAction::Invalid(errors);
        }
    };

    match api.create_employee(&new).await {
        Ok(record) => CreateAction::Created { record, at },
        Err(e) => {
            tracing::warn!(error = %e, "Error creating employee");
            CreateAction::Failed {
                message: e.to_string(),
                at,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeApi;
    use crate::domain::FieldError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn filled() -> CreateState {
        [
            FormEdit::FirstName("Katherine".to_string()),
            FormEdit::LastName("Johnson".to_string()),
            FormEdit::Age("38".to_string()),
            FormEdit::DateOfJoining("2026-12-01".to_string()),
            FormEdit::EmployeeType(EmployeeType::PartTime),
        ]
        .into_iter()
        .fold(CreateState::default(), |state, edit| {
            state.reduce(CreateAction::Edit(edit))
        })
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let api = FakeApi::default();
        let state = CreateState::default();

        let action = submit_create(&api, &state.form, today(), Instant::now()).await;
        let state = state.reduce(action);

        assert_eq!(api.call_count(), 0);
        assert_eq!(state.errors.get(Field::FirstName), Some(FieldError::Required));
        assert_eq!(state.errors.get(Field::LastName), Some(FieldError::Required));
        assert_eq!(state.errors.get(Field::DateOfJoining), Some(FieldError::Required));
        assert_eq!(state.errors.get(Field::Age), None);
    }

    #[tokio::test]
    async fn test_editing_clears_only_that_field() {
        let api = FakeApi::default();
        let state = CreateState::default();
        let action = submit_create(&api, &state.form, today(), Instant::now()).await;
        let state = state.reduce(action);

        let state = state.reduce(CreateAction::Edit(FormEdit::FirstName("John2".to_string())));

        assert_eq!(state.errors.get(Field::FirstName), None);
        assert_eq!(state.errors.get(Field::LastName), Some(FieldError::Required));
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form() {
        let api = FakeApi::default();
        let state = filled();
        let now = Instant::now();

        let action = submit_create(&api, &state.form, today(), now).await;
        let state = state.reduce(action);

        assert_eq!(api.records.lock().unwrap().len(), 1);
        let created = &api.records.lock().unwrap()[0];
        assert_eq!(created.first_name, "Katherine");
        assert_eq!(created.employee_type, EmployeeType::PartTime);
        assert_eq!(created.current_status, 1);

        assert_eq!(state.form, EmployeeForm::default());
        assert_eq!(state.message_text(now), Some(CREATED_MESSAGE));
        assert_eq!(state.message_text(now + FEEDBACK_TTL), None);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_and_reports() {
        let api = FakeApi::default().failing(&["Error creating employee"]);
        let state = filled();
        let now = Instant::now();

        let action = submit_create(&api, &state.form, today(), now).await;
        let state = state.reduce(action);

        assert_eq!(state.form.first_name, "Katherine");
        assert_eq!(
            state.message_text(now + FEEDBACK_TTL),
            Some("Error creating employee: GraphQL error: Error creating employee")
        );
    }
}
