//! View model types representing renderable console state.
//!
//! View models are computed by [`Console::view`](crate::app::Console::view)
//! from a state snapshot and consumed by the renderer. Every string in them is
//! already localized; they carry no business logic.
//!
//! Pagination lives here too: the list coordinator holds the full row set and
//! [`Pager`] decides which slice of it is visible.

use crate::app::{DialogMode, NoticeKind};
use std::ops::Range;

/// Page sizes offered by the list footer.
pub const PAGE_SIZES: [usize; 2] = [5, 10];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZES[0];

/// Zero-based page cursor over the row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` rows (at least one).
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// Changes the page size and returns to the first page.
    ///
    /// Sizes outside [`PAGE_SIZES`] are refused.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZES.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page = 0;
        true
    }

    /// Moves to `page`, refusing pages past the end of `total` rows.
    pub fn show_page(&mut self, page: usize, total: usize) -> bool {
        if page >= self.page_count(total) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Index range of the rows visible on the current page.
    ///
    /// A page left dangling by a shrinking row set is clamped to the last page.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        let page = self.page.min(self.page_count(total) - 1);
        let start = (page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete console view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleView {
    pub header: HeaderInfo,
    /// Localized "loading" label while the gate is engaged.
    pub busy: Option<String>,
    pub notice: Option<NoticeView>,
    /// Localized titles of the id, name, start date, status, and department
    /// columns.
    pub columns: [String; 5],
    pub rows: Vec<RowView>,
    pub empty_state: Option<String>,
    pub footer: FooterInfo,
    pub dialog: Option<DialogView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub message: String,
}

/// One list row with localized cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub status: String,
    pub department: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `1–5 of 12`
    pub range: String,
    /// `5 of 12 total`
    pub visible: String,
    /// `3 selected`, absent when nothing is selected.
    pub selected: Option<String>,
    /// `Rows per page: 5`
    pub page_size: String,
    pub page: usize,
    pub page_count: usize,
}

/// Open record dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub mode: DialogMode,
    pub fields: Vec<FieldView>,
    /// Confirm button label; absent for read-only dialogs.
    pub confirm: Option<String>,
    pub cancel: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field name accepted by `set <field> <value>`.
    pub key: &'static str,
    pub label: String,
    pub value: String,
    pub editable: bool,
}
