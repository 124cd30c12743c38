//! Search panel: draft criteria and the buttons around them.
//!
//! The panel edits its own draft independently of the list. Nothing reaches the
//! coordinator until the user presses a button, at which point the panel emits
//! a [`PanelIntent`] for the console to run.

use crate::domain::{Criteria, StatusFilter, DATE_FORMAT};
use chrono::NaiveDate;

/// Request emitted by a panel button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelIntent {
    /// Search with these criteria (also produced by "clear").
    Search(Criteria),
    /// Open the create dialog.
    Create,
    /// Delete the selected rows.
    DeleteSelected,
}

/// Draft search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPanel {
    draft: Criteria,
}

impl SearchPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &Criteria {
        &self.draft
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.draft.keyword = keyword.into();
    }

    pub fn set_period(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.draft.start_date = start;
        self.draft.end_date = end;
    }

    /// Sets the department filter; an empty id means "all departments".
    pub fn set_department(&mut self, department_id: &str) {
        let department_id = department_id.trim();
        self.draft.department_id = (!department_id.is_empty()).then(|| department_id.to_string());
    }

    pub fn set_status(&mut self, status: Option<StatusFilter>) {
        self.draft.status = status;
    }

    /// Sets one draft field from text, as typed on a command line.
    ///
    /// Accepted fields: `keyword`, `start`, `end`, `department`, `status`.
    /// Empty values clear the field. Returns `false` for unknown fields and
    /// unparsable values, leaving the draft unchanged.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let value = value.trim();
        match field {
            "keyword" | "employeeId" => self.set_keyword(value),
            "start" | "startDate" => match parse_date(value) {
                Some(date) => self.draft.start_date = date,
                None => return false,
            },
            "end" | "endDate" => match parse_date(value) {
                Some(date) => self.draft.end_date = date,
                None => return false,
            },
            "department" | "departmentId" => self.set_department(value),
            "status" => {
                if value.is_empty() {
                    self.set_status(None);
                } else {
                    match StatusFilter::parse(value) {
                        Some(status) => self.set_status(Some(status)),
                        None => return false,
                    }
                }
            }
            _ => return false,
        }
        true
    }

    /// The "search" button.
    #[must_use]
    pub fn submit(&self) -> PanelIntent {
        PanelIntent::Search(self.draft.clone())
    }

    /// The "clear" button: resets the draft and searches with neutral criteria.
    pub fn clear(&mut self) -> PanelIntent {
        self.draft = Criteria::neutral();
        PanelIntent::Search(Criteria::neutral())
    }

    #[must_use]
    pub const fn request_create(&self) -> PanelIntent {
        PanelIntent::Create
    }

    #[must_use]
    pub const fn request_delete(&self) -> PanelIntent {
        PanelIntent::DeleteSelected
    }
}

fn parse_date(value: &str) -> Option<Option<NaiveDate>> {
    if value.is_empty() {
        return Some(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok().map(Some)
}
