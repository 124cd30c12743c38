//! Row set, selection, and last-search memo.
//!
//! [`ListCoordinator`] is the single owner of what the list view shows. It
//! delegates every remote call to an [`EmployeeStore`] and keeps three pieces of
//! state consistent with each other:
//!
//! - **Rows**: replaced wholesale by each search, emptied when a search fails
//! - **Memo**: the criteria of the last submitted search, reused to refresh the
//!   list after a mutation
//! - **Selection**: ids checked for batch deletion, always a subset of the
//!   current rows
//!
//! The coordinator returns errors instead of reporting them. Turning an error
//! into a notification is the console's job.

use crate::domain::{ConsoleError, Criteria, Employee, EmployeeRow, Result};
use crate::store::{EmployeeStore, RequestContext};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Result of refreshing the list after a successful mutation.
#[derive(Debug)]
pub enum Refresh {
    /// No search had been submitted, so there was nothing to repeat.
    Skipped,
    /// The memo was searched again and produced this many rows.
    Reloaded(usize),
    /// The repeated search failed and the row set was emptied.
    Failed(ConsoleError),
}

/// Owner of the row set, the selection, and the last-search memo.
pub struct ListCoordinator {
    store: Arc<dyn EmployeeStore>,
    rows: Vec<EmployeeRow>,
    memo: Option<Criteria>,
    selection: BTreeSet<String>,
}

impl ListCoordinator {
    #[must_use]
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            store,
            rows: Vec::new(),
            memo: None,
            selection: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }

    /// Criteria of the most recently submitted search.
    #[must_use]
    pub const fn memo(&self) -> Option<&Criteria> {
        self.memo.as_ref()
    }

    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    fn has_row(&self, id: &str) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    /// Flips the checkbox of one row. Ids not in the row set are ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if !self.has_row(id) {
            tracing::debug!(employee_id = %id, "ignoring selection of unknown row");
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
        true
    }

    /// Replaces the selection, keeping only ids present in the row set.
    pub fn set_selection<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selection: BTreeSet<String> = ids
            .into_iter()
            .map(Into::into)
            .filter(|id| self.has_row(id))
            .collect();
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Submits a search.
    ///
    /// The memo is overwritten before the store is called, so it records the
    /// submission even when the search fails.
    ///
    /// # Errors
    ///
    /// Returns the store error after emptying the row set.
    pub async fn search(&mut self, ctx: &RequestContext, criteria: Criteria) -> Result<usize> {
        tracing::debug!(neutral = criteria.is_neutral(), "search submitted");
        self.memo = Some(criteria.clone());
        self.load(ctx, &criteria).await
    }

    /// Repeats the memo search without touching the memo.
    pub async fn refresh(&mut self, ctx: &RequestContext) -> Refresh {
        let Some(criteria) = self.memo.clone() else {
            tracing::debug!("no previous search, skipping refresh");
            return Refresh::Skipped;
        };

        match self.load(ctx, &criteria).await {
            Ok(count) => Refresh::Reloaded(count),
            Err(err) => Refresh::Failed(err),
        }
    }

    async fn load(&mut self, ctx: &RequestContext, criteria: &Criteria) -> Result<usize> {
        match self.store.search(ctx, criteria).await {
            Ok(rows) => {
                self.replace_rows(rows);
                Ok(self.rows.len())
            }
            Err(err) => {
                self.replace_rows(Vec::new());
                Err(err)
            }
        }
    }

    fn replace_rows(&mut self, rows: Vec<EmployeeRow>) {
        self.rows = rows;
        let before = self.selection.len();
        let rows = &self.rows;
        self.selection
            .retain(|id| rows.iter().any(|row| &row.id == id));
        if self.selection.len() != before {
            tracing::debug!(
                dropped = before - self.selection.len(),
                "pruned selection to surviving rows"
            );
        }
    }

    /// Fetches the full record behind a row.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] or the store error.
    pub async fn fetch_detail(&self, ctx: &RequestContext, id: &str) -> Result<Employee> {
        self.store.fetch_detail(ctx, id).await
    }

    /// Creates `record`, then refreshes the list from the memo.
    ///
    /// # Errors
    ///
    /// Returns the store error if the creation itself fails; the list is left
    /// untouched in that case.
    pub async fn create_record(&mut self, ctx: &RequestContext, record: &Employee) -> Result<Refresh> {
        self.store.create(ctx, record).await?;
        tracing::debug!(employee_id = %record.id, "record created");
        Ok(self.refresh(ctx).await)
    }

    /// Updates `record`, then refreshes the list from the memo.
    ///
    /// # Errors
    ///
    /// Returns the store error if the update itself fails.
    pub async fn update_record(&mut self, ctx: &RequestContext, record: &Employee) -> Result<Refresh> {
        self.store.update(ctx, record).await?;
        tracing::debug!(employee_id = %record.id, "record updated");
        Ok(self.refresh(ctx).await)
    }

    /// Deletes every selected row in one batch, then refreshes the list.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NothingSelected`] without calling the store when
    /// the selection is empty. On a store failure the selection is kept.
    pub async fn delete_selected(&mut self, ctx: &RequestContext) -> Result<Refresh> {
        if self.selection.is_empty() {
            return Err(ConsoleError::NothingSelected);
        }

        let ids: Vec<String> = self.selection.iter().cloned().collect();
        self.store.delete_batch(ctx, &ids).await?;
        tracing::debug!(count = ids.len(), "selected records deleted");

        self.selection.clear();
        Ok(self.refresh(ctx).await)
    }
}

impl fmt::Debug for ListCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCoordinator")
            .field("rows", &self.rows.len())
            .field("memo", &self.memo)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
