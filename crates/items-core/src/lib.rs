//! Items Core
//!
//! Everything behind the item list screen that does not touch the DOM:
//! - domain: Item entity and request payloads
//! - form: Create/Edit form state machine and validation
//! - table: projection of the last fetched list into rows
//! - api: REST collaborator trait and its reqwest implementation
//! - controller: orchestrates fetch → render → submit → refetch

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form;
pub mod table;


pub use api::{HttpItemsApi, ItemsApi};
pub use config::{ControllerConfig, Labels, PriorityConfig, PriorityLevel};
pub use controller::{Dialogs, ItemListController, ItemListState, SubmitOutcome};
pub use domain::{Entity, Item, ItemId, ItemPayload};
pub use error::{ApiError, ApiResult, ValidationError};
pub use form::{ItemForm, Mode, SubmitTarget};
pub use table::{ItemTable, TableRow, TableView};
