//! Record dialog session state machine.
//!
//! ```text
//!            new record                         confirm ok / cancel
//!   Closed ─────────────────────────▶ Open ───────────────────────▶ Closed
//!     │                                ▲
//!     │ row action     fetch ok        │
//!     └──────────▶ Opening ────────────┘
//!                     │ fetch failed / cancel
//!                     └──────────────────────────────────────────▶ Closed
//! ```
//!
//! An `Opening` session carries a ticket. A fetch result is applied only if the
//! session is still `Opening` with the same ticket, so a result that arrives
//! after the user cancelled or opened another row is dropped.

use super::modes::DialogMode;
use crate::domain::{is_valid_phone, ConsoleError, Employee, FieldEdit, Result};
use crate::i18n::Locale;

/// Identifies one pending detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Dialog session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// Waiting for the record behind `id`.
    Opening {
        mode: DialogMode,
        id: String,
        ticket: Ticket,
    },
    Open {
        mode: DialogMode,
        payload: Employee,
    },
}

/// What confirming the open dialog asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Employee),
    Update(Employee),
}

impl Submission {
    #[must_use]
    pub const fn record(&self) -> &Employee {
        match self {
            Self::Create(record) | Self::Update(record) => record,
        }
    }

    /// Localization key of the notice shown when the submission succeeds.
    #[must_use]
    pub const fn success_key(&self) -> &'static str {
        match self {
            Self::Create(_) => "successInsert",
            Self::Update(_) => "successUpdate",
        }
    }
}

/// Outcome of a field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The field already held that value.
    Unchanged,
    /// The dialog mode or the value did not allow the edit.
    Rejected,
}

/// Owner of the dialog session.
#[derive(Debug, Clone, Default)]
pub struct DialogSession {
    state: DialogState,
    next_ticket: u64,
}

impl DialogSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &DialogState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.state, DialogState::Closed)
    }

    /// Mode of an opening or open dialog.
    #[must_use]
    pub const fn mode(&self) -> Option<DialogMode> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Opening { mode, .. } | DialogState::Open { mode, .. } => Some(*mode),
        }
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&Employee> {
        match &self.state {
            DialogState::Open { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Localized title of the open dialog.
    #[must_use]
    pub fn title(&self, locale: Locale) -> Option<&'static str> {
        match &self.state {
            DialogState::Open { mode, .. } => Some(locale.text(mode.title_key())),
            _ => None,
        }
    }

    fn ensure_not_open(&self) -> Result<()> {
        if self.is_open() {
            Err(ConsoleError::Dialog("a dialog is already open".into()))
        } else {
            Ok(())
        }
    }

    /// Opens a create dialog with an empty record.
    ///
    /// A pending fetch is superseded.
    ///
    /// # Errors
    ///
    /// Fails if a dialog is already open.
    pub fn open_create(&mut self) -> Result<()> {
        self.ensure_not_open()?;
        tracing::debug!("dialog opened for create");
        self.state = DialogState::Open {
            mode: DialogMode::Create,
            payload: Employee::default(),
        };
        Ok(())
    }

    /// Moves to `Opening` for a fetching mode and hands out its ticket.
    ///
    /// A pending fetch is superseded: its ticket will no longer match.
    ///
    /// # Errors
    ///
    /// Fails for [`DialogMode::Create`] or if a dialog is already open.
    pub fn begin_fetch(&mut self, mode: DialogMode, id: &str) -> Result<Ticket> {
        if !mode.fetches_record() {
            return Err(ConsoleError::Dialog(format!("{mode} dialogs do not fetch a record")));
        }
        self.ensure_not_open()?;

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        tracing::debug!(%mode, employee_id = %id, ticket = ticket.0, "dialog opening");
        self.state = DialogState::Opening {
            mode,
            id: id.to_string(),
            ticket,
        };
        Ok(ticket)
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// `Some(record)` opens the dialog, `None` (failed fetch) closes it.
    /// Returns `false` and changes nothing when the ticket is stale.
    pub fn complete_fetch(&mut self, ticket: Ticket, record: Option<Employee>) -> bool {
        let mode = match &self.state {
            DialogState::Opening { mode, ticket: pending, .. } if *pending == ticket => *mode,
            _ => {
                tracing::debug!(ticket = ticket.0, "dropping stale detail result");
                return false;
            }
        };

        self.state = match record {
            Some(payload) => {
                tracing::debug!(%mode, employee_id = %payload.id, "dialog opened");
                DialogState::Open { mode, payload }
            }
            None => DialogState::Closed,
        };
        true
    }

    /// Applies a field edit to the open payload.
    pub fn apply_edit(&mut self, edit: FieldEdit) -> EditOutcome {
        let DialogState::Open { mode, payload } = &mut self.state else {
            return EditOutcome::Rejected;
        };
        if !mode.accepts_edits() || (edit.touches_id() && !mode.id_editable()) {
            tracing::debug!(%mode, ?edit, "edit rejected by dialog mode");
            return EditOutcome::Rejected;
        }
        if let FieldEdit::Phone(phone) = &edit {
            if !is_valid_phone(phone) {
                return EditOutcome::Rejected;
            }
        }

        if payload.apply(edit) {
            EditOutcome::Applied
        } else {
            EditOutcome::Unchanged
        }
    }

    /// Builds the submission for the confirm button.
    ///
    /// The dialog stays open; the caller closes it once the store accepts the
    /// submission.
    ///
    /// # Errors
    ///
    /// Fails if no dialog is open or the open dialog offers no confirm.
    pub fn submission(&self) -> Result<Submission> {
        match &self.state {
            DialogState::Open {
                mode: DialogMode::Create,
                payload,
            } => Ok(Submission::Create(payload.clone())),
            DialogState::Open {
                mode: DialogMode::Edit,
                payload,
            } => Ok(Submission::Update(payload.clone())),
            DialogState::Open {
                mode: DialogMode::Detail,
                ..
            } => Err(ConsoleError::Dialog("detail dialogs cannot be confirmed".into())),
            _ => Err(ConsoleError::Dialog("no dialog is open".into())),
        }
    }

    /// Closes the dialog from any state. Returns `true` if it was not closed.
    pub fn close(&mut self) -> bool {
        let was_closed = self.is_closed();
        if !was_closed {
            tracing::debug!(mode = ?self.mode(), "dialog closed");
        }
        self.state = DialogState::Closed;
        !was_closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeStatus;

    fn record(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Ada".into(),
            phone: "0912".into(),
            status: Some(EmployeeStatus::Active),
            ..Employee::default()
        }
    }

    #[test]
    fn create_opens_with_neutral_payload() {
        let mut dialog = DialogSession::new();
        dialog.open_create().unwrap();

        assert_eq!(dialog.mode(), Some(DialogMode::Create));
        assert_eq!(dialog.payload(), Some(&Employee::default()));
        assert_eq!(dialog.title(Locale::En), Some("Create New"));
        assert!(dialog.open_create().is_err());
    }

    #[test]
    fn fetch_result_opens_or_closes() {
        let mut dialog = DialogSession::new();
        let ticket = dialog.begin_fetch(DialogMode::Edit, "E200").unwrap();
        assert!(!dialog.is_open());
        assert!(dialog.payload().is_none());

        assert!(dialog.complete_fetch(ticket, None));
        assert!(dialog.is_closed());

        let ticket = dialog.begin_fetch(DialogMode::Detail, "E201").unwrap();
        assert!(dialog.complete_fetch(ticket, Some(record("E201"))));
        assert_eq!(dialog.mode(), Some(DialogMode::Detail));
        assert_eq!(dialog.payload().map(|r| r.id.as_str()), Some("E201"));
    }

    #[test]
    fn create_mode_never_fetches() {
        let mut dialog = DialogSession::new();
        assert!(dialog.begin_fetch(DialogMode::Create, "E1").is_err());
        assert!(dialog.is_closed());
    }

    #[test]
    fn superseded_and_cancelled_fetches_are_dropped() {
        let mut dialog = DialogSession::new();
        let first = dialog.begin_fetch(DialogMode::Edit, "E1").unwrap();
        let second = dialog.begin_fetch(DialogMode::Detail, "E2").unwrap();

        assert!(!dialog.complete_fetch(first, Some(record("E1"))));
        assert!(matches!(dialog.state(), DialogState::Opening { id, .. } if id == "E2"));

        assert!(dialog.close());
        assert!(!dialog.complete_fetch(second, Some(record("E2"))));
        assert!(dialog.is_closed());
    }

    #[test]
    fn id_is_immutable_outside_create() {
        let mut dialog = DialogSession::new();
        let ticket = dialog.begin_fetch(DialogMode::Edit, "E7").unwrap();
        dialog.complete_fetch(ticket, Some(record("E7")));

        assert_eq!(dialog.apply_edit(FieldEdit::Id("E8".into())), EditOutcome::Rejected);
        assert_eq!(dialog.apply_edit(FieldEdit::Name("Grace".into())), EditOutcome::Applied);
        assert_eq!(dialog.apply_edit(FieldEdit::Name("Grace".into())), EditOutcome::Unchanged);

        let submission = dialog.submission().unwrap();
        assert_eq!(submission.record().id, "E7");
        assert_eq!(submission.success_key(), "successUpdate");
        assert!(dialog.is_open());
    }

    #[test]
    fn detail_mode_is_read_only_and_cannot_confirm() {
        let mut dialog = DialogSession::new();
        let ticket = dialog.begin_fetch(DialogMode::Detail, "E7").unwrap();
        dialog.complete_fetch(ticket, Some(record("E7")));

        assert_eq!(dialog.apply_edit(FieldEdit::Name("x".into())), EditOutcome::Rejected);
        assert!(dialog.submission().is_err());
    }

    #[test]
    fn invalid_phone_is_rejected_and_value_kept() {
        let mut dialog = DialogSession::new();
        dialog.open_create().unwrap();
        dialog.apply_edit(FieldEdit::Phone("0912".into()));

        assert_eq!(dialog.apply_edit(FieldEdit::Phone("09a".into())), EditOutcome::Rejected);
        assert_eq!(dialog.apply_edit(FieldEdit::Phone("01234567890".into())), EditOutcome::Rejected);
        assert_eq!(dialog.payload().map(|r| r.phone.as_str()), Some("0912"));
    }

    #[test]
    fn edits_need_an_open_dialog() {
        let mut dialog = DialogSession::new();
        assert_eq!(dialog.apply_edit(FieldEdit::Name("x".into())), EditOutcome::Rejected);
        assert!(dialog.submission().is_err());
        assert!(!dialog.close());
    }
}
