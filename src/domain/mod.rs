//! Domain layer for the staffdesk console.
//!
//! This module contains the record and query types shared by every other layer,
//! independent of the store transport or the host. It keeps the wire encoding
//! next to the types (via serde attributes) so that the store client stays a thin
//! request layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`criteria`]: Search criteria and their query serialization
//! - [`employee`]: Employee record, list row, and field edits
//! - `codec`: serde adapters for blank-as-absent wire fields
//!
//! # Examples
//!
//! ```
//! use staffdesk::domain::{Criteria, Employee, FieldEdit};
//!
//! let criteria = Criteria::neutral().with_department("D002");
//! assert!(!criteria.is_neutral());
//!
//! let mut draft = Employee::default();
//! assert!(draft.apply(FieldEdit::Phone("0912345678".into())));
//! assert!(!draft.apply(FieldEdit::Phone("not-a-phone".into())));
//! ```

mod codec;
pub mod criteria;
pub mod employee;
pub mod error;

pub use codec::DATE_FORMAT;
pub use criteria::{Criteria, StatusFilter};
pub use employee::{
    department_label_key, is_valid_phone, Employee, EmployeeRow, EmployeeStatus, FieldEdit, Gender,
    DEPARTMENTS, PHONE_MAX_DIGITS,
};
pub use error::{ConsoleError, Result};
