//! Employee record model, its list projection and field edits.
//!
//! [`Employee`] is the full entity as stored remotely and shown in the dialog;
//! [`EmployeeRow`] is the reduced projection returned by searches. The two share
//! only the id: nothing in the crate converts one into the other.

use super::codec::{self, Coded};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of digits accepted in the phone field.
pub const PHONE_MAX_DIGITS: usize = 10;

/// Department codes and the localization keys of their labels.
pub const DEPARTMENTS: [(&str, &str); 4] = [
    ("D001", "departmentHr"),
    ("D002", "departmentIt"),
    ("D003", "departmentFinance"),
    ("D004", "departmentOperations"),
];

/// Localization key of a department label, if the code is known.
#[must_use]
pub fn department_label_key(department_id: &str) -> Option<&'static str> {
    DEPARTMENTS
        .iter()
        .find(|(code, _)| *code == department_id)
        .map(|(_, key)| *key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Coded for Gender {
    fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" | "m" => Some(Self::Male),
            "F" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Whether the employee account is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    /// `Y`
    Active,
    /// `N`
    Inactive,
}

impl Coded for EmployeeStatus {
    fn code(self) -> &'static str {
        match self {
            Self::Active => "Y",
            Self::Inactive => "N",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "Y" | "y" => Some(Self::Active),
            "N" | "n" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// One employee as stored remotely.
///
/// `Employee::default()` is the neutral record used by the Create dialog.
/// `modified_by` and `modified_at` are set by the store: they are decoded from
/// responses but never serialized into request bodies, and no [`FieldEdit`]
/// can touch them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Natural key, editable only while creating.
    #[serde(rename = "employeeId")]
    pub id: String,

    #[serde(rename = "employeeName", default, deserialize_with = "codec::null_as_empty")]
    pub name: String,

    #[serde(rename = "departmentId", default, deserialize_with = "codec::null_as_empty")]
    pub department_id: String,

    #[serde(default, with = "codec::optional_code")]
    pub gender: Option<Gender>,

    #[serde(rename = "birth", default, with = "codec::optional_date")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub email: String,

    #[serde(rename = "startDate", default, with = "codec::optional_date")]
    pub start_date: Option<NaiveDate>,

    /// Digits only, at most [`PHONE_MAX_DIGITS`].
    #[serde(default, deserialize_with = "codec::null_as_empty")]
    pub phone: String,

    #[serde(default, with = "codec::optional_code")]
    pub status: Option<EmployeeStatus>,

    #[serde(rename = "modifyBy", default, skip_serializing, deserialize_with = "codec::blank_as_none")]
    pub modified_by: Option<String>,

    #[serde(rename = "modifyDate", default, skip_serializing, deserialize_with = "codec::blank_as_none")]
    pub modified_at: Option<String>,
}

/// Row of the search result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    #[serde(rename = "employeeId")]
    pub id: String,

    #[serde(rename = "employeeName", default, deserialize_with = "codec::null_as_empty")]
    pub name: String,

    #[serde(rename = "startDate", default, with = "codec::optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, with = "codec::optional_code")]
    pub status: Option<EmployeeStatus>,

    #[serde(rename = "departmentId", default, deserialize_with = "codec::null_as_empty")]
    pub department_id: String,
}

/// Returns `true` if `phone` matches `^\d{0,10}$`.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.bytes().all(|b| b.is_ascii_digit()) && phone.len() <= PHONE_MAX_DIGITS
}

/// A single field change emitted by the form renderer.
///
/// `modified_by` and `modified_at` have no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Id(String),
    Name(String),
    DepartmentId(String),
    Gender(Option<Gender>),
    BirthDate(Option<NaiveDate>),
    Email(String),
    StartDate(Option<NaiveDate>),
    Phone(String),
    Status(Option<EmployeeStatus>),
}

impl FieldEdit {
    /// Builds an edit from a field name and its textual value.
    ///
    /// Field names are the store's wire names or their snake-case equivalents.
    /// An empty value clears optional fields. Returns `None` for unknown fields
    /// or values that cannot be parsed (bad date, unknown code).
    ///
    /// # Example
    ///
    /// ```rust
    /// use staffdesk::domain::{FieldEdit, Gender};
    ///
    /// assert_eq!(FieldEdit::parse("gender", "F"), Some(FieldEdit::Gender(Some(Gender::Female))));
    /// assert_eq!(FieldEdit::parse("modifyBy", "me"), None);
    /// ```
    #[must_use]
    pub fn parse(field: &str, value: &str) -> Option<Self> {
        let value = value.trim();
        let edit = match field {
            "id" | "employeeId" => Self::Id(value.to_string()),
            "name" | "employeeName" => Self::Name(value.to_string()),
            "department" | "departmentId" | "department_id" => Self::DepartmentId(value.to_string()),
            "gender" => Self::Gender(parse_code(value)?),
            "birth" | "birthDate" | "birth_date" => Self::BirthDate(parse_date(value)?),
            "email" => Self::Email(value.to_string()),
            "startDate" | "start_date" => Self::StartDate(parse_date(value)?),
            "phone" => Self::Phone(value.to_string()),
            "status" => Self::Status(parse_code(value)?),
            _ => return None,
        };
        Some(edit)
    }

    /// Returns `true` for edits of the natural key.
    #[must_use]
    pub const fn touches_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

fn parse_code<T: Coded>(value: &str) -> Option<Option<T>> {
    if value.is_empty() {
        Some(None)
    } else {
        T::from_code(value).map(Some)
    }
}

fn parse_date(value: &str) -> Option<Option<NaiveDate>> {
    if value.is_empty() {
        Some(None)
    } else {
        NaiveDate::parse_from_str(value, codec::DATE_FORMAT).ok().map(Some)
    }
}

impl Employee {
    /// Applies a field edit, returning `true` if the record changed.
    ///
    /// Phone edits that are not all digits or longer than
    /// [`PHONE_MAX_DIGITS`] are refused and leave the record untouched. Mode
    /// rules (read-only id, read-only detail view) are enforced by the dialog,
    /// not here.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        }

        match edit {
            FieldEdit::Id(v) => set(&mut self.id, v),
            FieldEdit::Name(v) => set(&mut self.name, v),
            FieldEdit::DepartmentId(v) => set(&mut self.department_id, v),
            FieldEdit::Gender(v) => set(&mut self.gender, v),
            FieldEdit::BirthDate(v) => set(&mut self.birth_date, v),
            FieldEdit::Email(v) => set(&mut self.email, v),
            FieldEdit::StartDate(v) => set(&mut self.start_date, v),
            FieldEdit::Phone(v) => is_valid_phone(&v) && set(&mut self.phone, v),
            FieldEdit::Status(v) => set(&mut self.status, v),
        }
    }
}
