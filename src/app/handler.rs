//! Event handling and workflow coordination.
//!
//! [`Console`] is the boundary between a host (terminal REPL, tests) and the
//! coordinators. A host feeds it [`Event`]s; the console runs the matching
//! workflow and reports whether the view needs to be re-rendered.
//!
//! # Architecture
//!
//! ```text
//! Host input → Event → Console::handle → LoadingGate → ListCoordinator → EmployeeStore
//!                              │                             │
//!                              ├── DialogSession             └── Result
//!                              └── NotificationCenter ◀──────────┘
//! ```
//!
//! Every store round trip (search, detail fetch, create, update, delete) and
//! every locale change runs inside one [`LoadingGate`] activation. A mutation's
//! follow-up search runs inside the mutation's activation.
//!
//! Errors stop here: each failed workflow produces exactly one notification and
//! the console state stays renderable.
//!
//! Events are serialized: [`Console::handle`] borrows the console mutably until
//! the workflow and its gate floor have finished, so a cancel or a second row
//! open cannot arrive while a detail fetch is pending. The fetch tickets of
//! [`DialogSession`] guard hosts that drive the session directly and deliver
//! fetch results out of order.
//!
//! # Example
//!
//! ```no_run
//! use staffdesk::app::{Console, Event};
//! use staffdesk::domain::Criteria;
//! use staffdesk::i18n::Locale;
//! use staffdesk::store::HttpStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> staffdesk::Result<()> {
//! let store = Arc::new(HttpStore::new("http://localhost:8080/api/employee", 30)?);
//! let mut console = Console::new(store, Locale::En);
//! console.handle(Event::Search(Criteria::neutral())).await;
//! println!("{} rows", console.list().rows().len());
//! # Ok(())
//! # }
//! ```

use super::dialog::{DialogSession, EditOutcome, Submission};
use super::gate::LoadingGate;
use super::list::{ListCoordinator, Refresh};
use super::modes::DialogMode;
use super::notification::{Notice, NoticeKind, NotificationCenter};
use super::search_panel::PanelIntent;
use crate::domain::{ConsoleError, Criteria, FieldEdit};
use crate::i18n::Locale;
use crate::store::{EmployeeStore, RequestContext};
use crate::ui::Pager;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// Input understood by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Submit a search (the panel's search and clear buttons).
    Search(Criteria),
    /// Open the dialog for a new record.
    NewRecord,
    /// Open the dialog for an existing row, fetching its record first.
    OpenRow {
        mode: DialogMode,
        id: String,
    },
    /// Change one field of the open dialog's payload.
    EditField(FieldEdit),
    /// Confirm the open dialog.
    ConfirmDialog,
    /// Cancel or ×-close the dialog.
    CancelDialog,
    /// Flip one row's checkbox.
    ToggleRow(String),
    /// Replace the selection.
    SelectRows(Vec<String>),
    /// Batch-delete the selected rows.
    DeleteSelected,
    ChangeLocale(Locale),
    DismissNotice,
    /// Zero-based page of the list.
    ShowPage(usize),
    SetPageSize(usize),
}

impl From<PanelIntent> for Event {
    fn from(intent: PanelIntent) -> Self {
        match intent {
            PanelIntent::Search(criteria) => Self::Search(criteria),
            PanelIntent::Create => Self::NewRecord,
            PanelIntent::DeleteSelected => Self::DeleteSelected,
        }
    }
}

/// Owner of the list, the dialog, the loading gate, and the notification slot.
#[derive(Debug)]
pub struct Console {
    pub(super) list: ListCoordinator,
    pub(super) dialog: DialogSession,
    pub(super) gate: LoadingGate,
    pub(super) notices: NotificationCenter,
    pub(super) pager: Pager,
    pub(super) context: RequestContext,
}

impl Console {
    /// Creates a console with the default gate floor and notice lifetime.
    #[must_use]
    pub fn new(store: Arc<dyn EmployeeStore>, locale: Locale) -> Self {
        Self {
            list: ListCoordinator::new(store),
            dialog: DialogSession::new(),
            gate: LoadingGate::default(),
            notices: NotificationCenter::default(),
            pager: Pager::new(),
            context: RequestContext::new(locale),
        }
    }

    /// Creates a console configured from `config`.
    #[must_use]
    pub fn from_config(store: Arc<dyn EmployeeStore>, config: &crate::Config) -> Self {
        Self::new(store, config.locale)
            .with_gate(LoadingGate::new(config.min_busy))
            .with_notification_ttl(config.notification_ttl)
    }

    #[must_use]
    pub fn with_gate(mut self, gate: LoadingGate) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notices = NotificationCenter::new(ttl);
        self
    }

    #[must_use]
    pub const fn list(&self) -> &ListCoordinator {
        &self.list
    }

    #[must_use]
    pub const fn dialog(&self) -> &DialogSession {
        &self.dialog
    }

    /// The loading gate; clone it to watch the busy flag from elsewhere.
    #[must_use]
    pub const fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The visible notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.context.locale
    }

    /// Processes one event. Returns `true` if the view should be re-rendered.
    pub async fn handle(&mut self, event: Event) -> bool {
        let span = tracing::debug_span!("event", ?event);
        self.dispatch(event).instrument(span).await
    }

    async fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::Search(criteria) => self.search(criteria).await,
            Event::NewRecord => self.open_create(),
            Event::OpenRow { mode, id } => self.open_row(mode, &id).await,
            Event::EditField(edit) => self.edit_field(edit),
            Event::ConfirmDialog => self.confirm_dialog().await,
            Event::CancelDialog => self.dialog.close(),
            Event::ToggleRow(id) => self.list.toggle_selection(&id),
            Event::SelectRows(ids) => {
                self.list.set_selection(ids);
                true
            }
            Event::DeleteSelected => self.delete_selected().await,
            Event::ChangeLocale(locale) => self.change_locale(locale).await,
            Event::DismissNotice => self.notices.dismiss(),
            Event::ShowPage(page) => self.pager.show_page(page, self.list.rows().len()),
            Event::SetPageSize(size) => self.pager.set_page_size(size),
        }
    }

    /// Drops an expired notice. Returns `true` if the view changed.
    pub fn tick(&mut self) -> bool {
        self.notices.expire()
    }

    /// Runs a search and shows the first page of its rows.
    pub async fn search(&mut self, criteria: Criteria) -> bool {
        let ctx = self.context;
        let outcome = self.gate.run(self.list.search(&ctx, criteria)).await;

        match outcome {
            Err(err) => self.reject(&err),
            Ok(result) => {
                self.pager.reset();
                match result {
                    Ok(count) => tracing::debug!(count, "list replaced"),
                    Err(err) => self.report(&err),
                }
                true
            }
        }
    }

    pub fn open_create(&mut self) -> bool {
        match self.dialog.open_create() {
            Ok(()) => true,
            Err(err) => self.reject(&err),
        }
    }

    /// Fetches the record behind `id` and opens it in `mode`.
    pub async fn open_row(&mut self, mode: DialogMode, id: &str) -> bool {
        let ticket = match self.dialog.begin_fetch(mode, id) {
            Ok(ticket) => ticket,
            Err(err) => return self.reject(&err),
        };

        let ctx = self.context;
        let fetched = self.gate.run(self.list.fetch_detail(&ctx, id)).await;

        match fetched {
            Err(err) => {
                self.dialog.complete_fetch(ticket, None);
                self.reject(&err);
            }
            Ok(Ok(record)) => {
                if self.dialog.complete_fetch(ticket, Some(record)) {
                    self.announce("detailLoadSuccess");
                }
            }
            Ok(Err(err)) => {
                if self.dialog.complete_fetch(ticket, None) {
                    self.report(&err);
                }
            }
        }
        true
    }

    /// Applies a field edit to the open dialog. Returns `true` if it changed.
    pub fn edit_field(&mut self, edit: FieldEdit) -> bool {
        self.dialog.apply_edit(edit) == EditOutcome::Applied
    }

    /// Submits the open dialog; it closes only if the store accepts the record.
    pub async fn confirm_dialog(&mut self) -> bool {
        let submission = match self.dialog.submission() {
            Ok(submission) => submission,
            Err(err) => return self.reject(&err),
        };

        let ctx = self.context;
        let list = &mut self.list;
        let outcome = self
            .gate
            .run(async {
                match &submission {
                    Submission::Create(record) => list.create_record(&ctx, record).await,
                    Submission::Update(record) => list.update_record(&ctx, record).await,
                }
            })
            .await;

        match outcome {
            Err(err) => return self.reject(&err),
            Ok(Err(err)) => self.report(&err),
            Ok(Ok(refresh)) => {
                self.dialog.close();
                self.announce(submission.success_key());
                self.settle(refresh);
            }
        }
        true
    }

    /// Deletes the selected rows; an empty selection only raises a warning.
    pub async fn delete_selected(&mut self) -> bool {
        if self.list.selection().is_empty() {
            self.report(&ConsoleError::NothingSelected);
            return true;
        }

        let ctx = self.context;
        let outcome = self.gate.run(self.list.delete_selected(&ctx)).await;

        match outcome {
            Err(err) => return self.reject(&err),
            Ok(Err(err)) => self.report(&err),
            Ok(Ok(refresh)) => {
                self.announce("successDelete");
                self.settle(refresh);
            }
        }
        true
    }

    /// Switches the display locale and the `Accept-Language` of later calls.
    pub async fn change_locale(&mut self, locale: Locale) -> bool {
        let context = &mut self.context;
        let outcome = self
            .gate
            .run(async {
                context.locale = locale;
            })
            .await;

        match outcome {
            Err(err) => self.reject(&err),
            Ok(()) => {
                tracing::debug!(%locale, "locale changed");
                true
            }
        }
    }

    fn settle(&mut self, refresh: Refresh) {
        match refresh {
            Refresh::Skipped => {}
            Refresh::Reloaded(count) => {
                self.pager.reset();
                tracing::debug!(count, "list reloaded after mutation");
            }
            Refresh::Failed(err) => {
                self.pager.reset();
                self.report(&err);
            }
        }
    }

    fn announce(&mut self, key: &str) {
        let message = self.context.locale.text(key).to_string();
        self.notices.post(NoticeKind::Success, message);
    }

    /// Turns a workflow error into the single notification the user sees.
    fn report(&mut self, err: &ConsoleError) {
        let kind = match err {
            ConsoleError::NothingSelected => NoticeKind::Warning,
            _ => NoticeKind::Error,
        };
        let message = err
            .server_message()
            .map_or_else(|| self.context.locale.text(err.notice_key()).to_string(), str::to_string);

        tracing::warn!(error = %err, "workflow failed");
        self.notices.post(kind, message);
    }

    /// Logs a request the current state refuses. Nothing changes on screen.
    fn reject(&self, err: &ConsoleError) -> bool {
        tracing::debug!(error = %err, "request ignored");
        false
    }
}
