//! In-process [`CrudApi`] for view tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    Department, EmployeeRecord, EmployeeType, EmployeeUpdate, NewEmployee, Title,
};

use super::error::ClientError;
use super::transport::CrudApi;

#[derive(Default)]
pub struct FakeApi {
    pub records: Mutex<Vec<EmployeeRecord>>,
    pub fail_with: Mutex<Option<Vec<String>>>,
    pub calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// Make every later call fail with these GraphQL messages
    pub fn failing(self, messages: &[&str]) -> Self {
        *self.fail_with.lock().unwrap() = Some(messages.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with.lock().unwrap().clone() {
            Some(messages) => Err(ClientError::Graphql(messages)),
            None => Ok(()),
        }
    }
}

pub fn record(first_name: &str, employee_type: EmployeeType, status: i32) -> EmployeeRecord {
    EmployeeRecord {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        age: 30,
        date_of_joining: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
        title: Title::Employee,
        department: Department::IT,
        employee_type,
        current_status: status,
    }
}

#[async_trait]
impl CrudApi for FakeApi {
    async fn employee_list(&self) -> Result<Vec<EmployeeRecord>, ClientError> {
        self.enter()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn employee(&self, id: Uuid) -> Result<Option<EmployeeRecord>, ClientError> {
        self.enter()?;
        Ok(self.records.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create_employee(&self, input: &NewEmployee) -> Result<EmployeeRecord, ClientError> {
        self.enter()?;
        let record = EmployeeRecord::from_new(Uuid::new_v4(), input.clone());
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_employee(
        &self,
        id: Uuid,
        input: &EmployeeUpdate,
    ) -> Result<Option<EmployeeRecord>, ClientError> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        Ok(records.iter_mut().find(|r| r.id == id).map(|r| {
            *r = r.clone().apply(input);
            r.clone()
        }))
    }

    async fn delete_employee(&self, id: Uuid) -> Result<Option<Uuid>, ClientError> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let position = records.iter().position(|r| r.id == id);
        Ok(position.map(|index| records.remove(index).id))
    }
}
