//! Search criteria submitted to the store.
//!
//! A [`Criteria`] value is built fresh for every search and never mutated after
//! submission; the list coordinator keeps a clone of the last one as its memo.

use super::codec::DATE_FORMAT;
use chrono::NaiveDate;

/// Enabled/disabled filter on the employee status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Only active employees (`Y`).
    On,
    /// Only inactive employees (`N`).
    Off,
}

impl StatusFilter {
    /// Wire code sent in the `status` query parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::On => "Y",
            Self::Off => "N",
        }
    }

    /// Parses user input (`on`/`yes`/`y`, `off`/`no`/`n`).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "on" | "yes" | "y" => Some(Self::On),
            "off" | "no" | "n" => Some(Self::Off),
            _ => None,
        }
    }
}

/// Filter fields of one search.
///
/// The neutral value (`Criteria::default()`) has every field empty and matches
/// every row. Empty or absent fields never reach the wire; see
/// [`Criteria::query_pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Free-text keyword, matched by the store against the employee id.
    pub keyword: String,
    /// Inclusive lower bound on the start date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the start date.
    pub end_date: Option<NaiveDate>,
    /// Department code such as `D002`.
    pub department_id: Option<String>,
    /// Enabled/disabled filter.
    pub status: Option<StatusFilter>,
}

impl Criteria {
    /// The neutral criteria (all fields empty).
    #[must_use]
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Returns `true` if no field constrains the search.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.query_pairs().is_empty()
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    #[must_use]
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_period(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Serializes the criteria into query parameters.
    ///
    /// Fields that are absent or empty are omitted entirely so they do not
    /// over-constrain the remote filter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use staffdesk::domain::Criteria;
    ///
    /// let pairs = Criteria::neutral().with_department("D002").query_pairs();
    /// assert_eq!(pairs, vec![("departmentId", "D002".to_string())]);
    /// ```
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        if !self.keyword.trim().is_empty() {
            pairs.push(("employeeId", self.keyword.trim().to_string()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("startDate", date.format(DATE_FORMAT).to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("endDate", date.format(DATE_FORMAT).to_string()));
        }
        if let Some(department) = self.department_id.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            pairs.push(("departmentId", department.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.code().to_string()));
        }

        pairs
    }
}
