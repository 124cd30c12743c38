//! Store layer: the remote employee record store as seen by the coordinator.
//!
//! # Modules
//!
//! - `backend`: [`EmployeeStore`] trait and the per-session [`RequestContext`]
//! - `http`: reqwest-based [`HttpStore`]
//! - `models`: wire envelopes (`{ datas }`, `{ message }`, `{ id }`)

pub mod backend;
pub mod http;
pub mod models;

pub use backend::{EmployeeStore, RequestContext};
pub use http::HttpStore;
pub use models::{DataEnvelope, DeleteKey, ErrorBody};
