//! Employee creation form validation
//!
//! Pure predicates over raw form input. Validation always runs over the
//! whole form and reports at most one error per field.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::employee::{parse_date, Department, EmployeeType, NewEmployee, Title, STATUS_EMPLOYED};

/// Youngest age accepted at creation.
pub const MIN_AGE: i64 = 20;

/// Oldest age accepted at creation.
pub const MAX_AGE: i64 = 70;

/// Validated form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Age,
    DateOfJoining,
}

impl Field {
    /// Human-readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::DateOfJoining => "Date of Joining",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    Required,
    AlphabeticOnly,
    OutOfRange,
    MustBeFuture,
    InvalidDate,
}

impl FieldError {
    /// Message shown next to `field`
    pub fn message(&self, field: Field) -> String {
        let label = field.label();
        match self {
            FieldError::Required => format!("{} is required", label),
            FieldError::AlphabeticOnly => format!("{} must contain only letters", label),
            FieldError::OutOfRange => {
                format!("{} must be between {} and {}", label, MIN_AGE, MAX_AGE)
            }
            FieldError::MustBeFuture => format!("{} must be after today's date", label),
            FieldError::InvalidDate => format!("{} must be a valid date", label),
        }
    }
}

/// Field name to error. The form is valid iff this is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Message for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Drop the error for a field the user just edited.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .iter()
            .map(|(field, error)| error.message(field))
            .collect();
        f.write_str(&messages.join(", "))
    }
}

/// Raw creation form input, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub date_of_joining: String,
    pub title: Title,
    pub department: Department,
    pub employee_type: EmployeeType,
    pub current_status: i32,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: MIN_AGE.to_string(),
            date_of_joining: String::new(),
            title: Title::Employee,
            department: Department::IT,
            employee_type: EmployeeType::FullTime,
            current_status: STATUS_EMPLOYED,
        }
    }
}

/// Check a first or last name: non-blank and ASCII letters only.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FieldError::AlphabeticOnly);
    }
    Ok(())
}

/// Check an age as typed. Blank and zero count as missing.
pub fn validate_age(value: &str) -> Result<i32, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let age: i64 = value.parse().map_err(|_| FieldError::OutOfRange)?;
    if age == 0 {
        return Err(FieldError::Required);
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(FieldError::OutOfRange);
    }
    i32::try_from(age).map_err(|_| FieldError::OutOfRange)
}

/// Check a joining date: it must fall strictly after `today`.
pub fn validate_date_of_joining(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let date = parse_date(value).map_err(|_| FieldError::InvalidDate)?;
    if date <= today {
        return Err(FieldError::MustBeFuture);
    }
    Ok(date)
}

/// Validate the whole form, producing a store-ready input on success.
pub fn validate_new_employee(
    form: &EmployeeForm,
    today: NaiveDate,
) -> Result<NewEmployee, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(error) = validate_name(&form.first_name) {
        errors.insert(Field::FirstName, error);
    }
    if let Err(error) = validate_name(&form.last_name) {
        errors.insert(Field::LastName, error);
    }
    let age = validate_age(&form.age)
        .map_err(|error| errors.insert(Field::Age, error))
        .ok();
    let date_of_joining = validate_date_of_joining(&form.date_of_joining, today)
        .map_err(|error| errors.insert(Field::DateOfJoining, error))
        .ok();

    match (age, date_of_joining) {
        (Some(age), Some(date_of_joining)) if errors.is_empty() => Ok(NewEmployee {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            age,
            date_of_joining,
            title: form.title,
            department: form.department,
            employee_type: form.employee_type,
            current_status: Some(form.current_status),
        }),
        _ => Err(errors),
    }
}
