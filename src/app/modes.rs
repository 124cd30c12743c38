//! Dialog mode types.
//!
//! The record dialog is opened in one of three modes. The mode decides the
//! dialog title, whether fields accept edits, whether the id is editable, and
//! whether a confirm button is offered.
//!
//! | Mode     | Payload source     | Fields     | Id         | Confirm |
//! |----------|--------------------|------------|------------|---------|
//! | `Create` | neutral record     | editable   | editable   | create  |
//! | `Edit`   | fetched record     | editable   | read-only  | update  |
//! | `Detail` | fetched record     | read-only  | read-only  | none    |
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::DialogMode;
//!
//! assert!(DialogMode::Edit.fetches_record());
//! assert!(!DialogMode::Detail.offers_confirm());
//! assert_eq!(DialogMode::Create.title_key(), "createNew");
//! ```

use std::fmt;
use std::str::FromStr;

/// Mode the record dialog was opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogMode {
    /// New record, starting from an empty payload.
    Create,
    /// Existing record, fetched from the store before the dialog opens.
    Edit,
    /// Read-only view of a fetched record.
    Detail,
}

impl DialogMode {
    /// Localization key of the dialog title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Create => "createNew",
            Self::Edit => "edit",
            Self::Detail => "detail",
        }
    }

    /// `true` for modes whose payload comes from a detail fetch.
    #[must_use]
    pub const fn fetches_record(self) -> bool {
        matches!(self, Self::Edit | Self::Detail)
    }

    #[must_use]
    pub const fn accepts_edits(self) -> bool {
        !matches!(self, Self::Detail)
    }

    #[must_use]
    pub const fn id_editable(self) -> bool {
        matches!(self, Self::Create)
    }

    #[must_use]
    pub const fn offers_confirm(self) -> bool {
        !matches!(self, Self::Detail)
    }
}

impl fmt::Display for DialogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Detail => "detail",
        })
    }
}

impl FromStr for DialogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" | "new" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "detail" => Ok(Self::Detail),
            other => Err(format!("unknown dialog mode `{other}`")),
        }
    }
}
