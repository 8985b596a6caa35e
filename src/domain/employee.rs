//! Employee record types
//!
//! The persisted entity, its closed vocabularies and the two input shapes
//! accepted by the store (creation and restricted update).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

/// Status flag value for an employee currently on the payroll.
pub const STATUS_EMPLOYED: i32 = 1;

/// Status flag value for an employee who has left.
pub const STATUS_NOT_EMPLOYED: i32 = 0;

/// Wire format of `dateOfJoining`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date as it travels on the wire.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

/// Generates a closed string vocabulary: the variant names are the wire values.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, [$($variant:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in form display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    other => Err(DomainError::$error(other.to_string())),
                }
            }
        }
    };
}

vocabulary!(
    /// Job title
    Title, UnknownTitle, [Employee, Manager, Director, VP]
);

vocabulary!(
    /// Department the employee belongs to
    Department, UnknownDepartment, [IT, Marketing, HR, Engineering]
);

vocabulary!(
    /// Contract kind. Set at creation, never updated.
    EmployeeType, UnknownEmployeeType, [FullTime, PartTime, Contract, Seasonal]
);

/// A persisted employee record.
///
/// `id` is assigned by the record store. `employee_type` and the identity
/// fields never change after creation; see [`EmployeeUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: NaiveDate,
    pub title: Title,
    pub department: Department,
    pub employee_type: EmployeeType,
    pub current_status: i32,
}

impl EmployeeRecord {
    /// Materialize a new record under a store-assigned id.
    pub fn from_new(id: Uuid, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            age: new.age,
            date_of_joining: new.date_of_joining,
            title: new.title,
            department: new.department,
            employee_type: new.employee_type,
            current_status: new.current_status.unwrap_or(STATUS_EMPLOYED),
        }
    }

    /// Apply a restricted update. Absent fields keep their value.
    pub fn apply(mut self, update: &EmployeeUpdate) -> Self {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(status) = update.current_status {
            self.current_status = status;
        }
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_employed(&self) -> bool {
        self.current_status == STATUS_EMPLOYED
    }
}

/// Fields accepted by the create operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: NaiveDate,
    pub title: Title,
    pub department: Department,
    pub employee_type: EmployeeType,
    /// Defaults to employed when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<i32>,
}

/// The only mutable fields of a record. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<i32>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.department.is_none() && self.current_status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee() -> NewEmployee {
        NewEmployee {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            age: 36,
            date_of_joining: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            title: Title::Manager,
            department: Department::Engineering,
            employee_type: EmployeeType::FullTime,
            current_status: None,
        }
    }

    #[test]
    fn test_vocabulary_round_trips_wire_names() {
        assert_eq!("VP".parse::<Title>().unwrap(), Title::VP);
        assert_eq!("HR".parse::<Department>().unwrap(), Department::HR);
        assert_eq!(
            "PartTime".parse::<EmployeeType>().unwrap(),
            EmployeeType::PartTime
        );
        assert_eq!(EmployeeType::Seasonal.to_string(), "Seasonal");
    }

    #[test]
    fn test_vocabulary_rejects_unknown_values() {
        assert_eq!(
            "Intern".parse::<Title>(),
            Err(DomainError::UnknownTitle("Intern".to_string()))
        );
        assert!("it".parse::<Department>().is_err());
        assert!("Full Time".parse::<EmployeeType>().is_err());
    }

    #[test]
    fn test_from_new_defaults_status_to_employed() {
        let record = EmployeeRecord::from_new(Uuid::new_v4(), new_employee());
        assert_eq!(record.current_status, STATUS_EMPLOYED);
        assert!(record.is_employed());
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_apply_touches_only_present_fields() {
        let record = EmployeeRecord::from_new(Uuid::new_v4(), new_employee());
        let update = EmployeeUpdate {
            current_status: Some(STATUS_NOT_EMPLOYED),
            ..Default::default()
        };

        let updated = record.clone().apply(&update);
        assert_eq!(updated.current_status, STATUS_NOT_EMPLOYED);
        assert_eq!(updated.title, record.title);
        assert_eq!(updated.department, record.department);
        assert_eq!(updated.employee_type, record.employee_type);
        assert_eq!(updated.id, record.id);
    }

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let record = EmployeeRecord::from_new(Uuid::nil(), new_employee());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["dateOfJoining"], "2030-01-15");
        assert_eq!(json["employeeType"], "FullTime");
        assert_eq!(json["currentStatus"], 1);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2015-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2015, 3, 10).unwrap()
        );
        assert!(parse_date("2015-13-10").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
