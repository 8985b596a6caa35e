//! Domain module
//!
//! Employee records, derived fields and form validation.

pub mod employee;
pub mod error;
pub mod retirement;
pub mod validation;

pub use employee::{
    parse_date, Department, EmployeeRecord, EmployeeType, EmployeeUpdate, NewEmployee, Title,
    DATE_FORMAT, STATUS_EMPLOYED, STATUS_NOT_EMPLOYED,
};
pub use error::DomainError;
pub use retirement::{
    ensure_deletable, is_deletable, is_upcoming_retirement, project_retirement, project_retirement_date,
    RetirementProjection, RETIREMENT_AGE,
};
pub use validation::{validate_new_employee, EmployeeForm, Field, FieldError, ValidationErrors};
