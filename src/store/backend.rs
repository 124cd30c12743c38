//! Store backend abstraction.
//!
//! This module defines the [`EmployeeStore`] trait that abstracts over the remote
//! record store. The coordinator only ever talks to this trait, which keeps the
//! list/dialog logic independent of the transport and lets tests substitute a
//! scripted store.
//!
//! # Design Philosophy
//!
//! The trait is minimal: one method per logical store operation, no generic
//! query layer. Every call receives the session's [`RequestContext`] by
//! reference instead of reading ambient global state.

use crate::domain::{Criteria, Employee, EmployeeRow, Result};
use crate::i18n::Locale;
use async_trait::async_trait;

/// Per-session values that accompany every store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestContext {
    /// Current display locale, sent as `Accept-Language`.
    pub locale: Locale,
}

impl RequestContext {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

/// Abstraction over the remote employee record store.
///
/// # Implementations
///
/// - [`HttpStore`](crate::store::HttpStore): JSON over HTTP (default)
///
/// # Examples
///
/// ```no_run
/// use staffdesk::domain::Criteria;
/// use staffdesk::store::{EmployeeStore, HttpStore, RequestContext};
///
/// # async fn run() -> staffdesk::Result<()> {
/// let store = HttpStore::new("http://localhost:8080/api/employee", 30)?;
/// let rows = store.search(&RequestContext::default(), &Criteria::neutral()).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns the rows matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns a store or transport error if the search fails.
    async fn search(&self, ctx: &RequestContext, criteria: &Criteria) -> Result<Vec<EmployeeRow>>;

    /// Fetches the full record of one employee.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`](crate::ConsoleError::NotFound) if the
    /// store answers without a usable record, or a store/transport error.
    async fn fetch_detail(&self, ctx: &RequestContext, id: &str) -> Result<Employee>;

    /// Creates a new employee.
    ///
    /// # Errors
    ///
    /// Returns a store or transport error if the store rejects the record.
    async fn create(&self, ctx: &RequestContext, record: &Employee) -> Result<()>;

    /// Updates an existing employee, identified by `record.id`.
    ///
    /// # Errors
    ///
    /// Returns a store or transport error if the store rejects the record.
    async fn update(&self, ctx: &RequestContext, record: &Employee) -> Result<()>;

    /// Deletes every employee in `ids` in one call.
    ///
    /// # Errors
    ///
    /// Returns a store or transport error if the deletion fails. Backends may
    /// have deleted part of the batch before failing.
    async fn delete_batch(&self, ctx: &RequestContext, ids: &[String]) -> Result<()>;
}
