//! Client Layer
//!
//! The web client's behavior without rendering: a transport for the CRUD
//! contract and one immutable view state per screen. Each view exposes a
//! `reduce` transition and async effect functions that perform the API call
//! and return the action to dispatch.

pub mod create;
pub mod dashboard;
pub mod details;
pub mod edit;
pub mod error;
pub mod flash;
pub mod list;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use create::{submit_create, CreateAction, CreateState, FormEdit};
pub use dashboard::{load_dashboard, DashboardAction, DashboardState, DirectorySummary};
pub use details::{load_details, DetailsAction, DetailsState, EmployeeDetails};
pub use edit::{load_edit, submit_edit, DraftEdit, EditAction, EditDraft, EditState, EMPLOYEES_ROUTE};
pub use error::ClientError;
pub use flash::{Flash, FEEDBACK_TTL, NAVIGATION_DELAY};
pub use list::{delete_employee, load_list, ListAction, ListFilter, ListState, ListedEmployee};
pub use transport::{CrudApi, GraphQlClient, DEFAULT_ENDPOINT};
