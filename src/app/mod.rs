//! Application layer coordinating the list, the dialog, and the loading gate.
//!
//! This module sits between a host (main.rs, tests) and the store layer. The
//! host turns user input into [`Event`]s, the [`Console`] runs the matching
//! workflow, and the host renders [`Console::view`] when told to.
//!
//! # Architecture
//!
//! ```text
//! User Input → SearchPanel / Event → Console → LoadingGate → ListCoordinator → Store
//!                                       │
//!                                       ├── DialogSession
//!                                       └── NotificationCenter
//! ```
//!
//! # Modules
//!
//! - [`handler`]: [`Console`] and its [`Event`]s
//! - [`list`]: Row set, selection, and last-search memo
//! - [`dialog`]: Record dialog state machine
//! - [`modes`]: Dialog modes
//! - [`gate`]: Minimum-duration busy indicator and workflow lock
//! - [`notification`]: Single-slot auto-dismissing notices
//! - [`search_panel`]: Draft search criteria and panel buttons
//! - `view`: View model computation

pub mod dialog;
pub mod gate;
pub mod handler;
pub mod list;
pub mod modes;
pub mod notification;
pub mod search_panel;
mod view;

pub use dialog::{DialogSession, DialogState, EditOutcome, Submission, Ticket};
pub use gate::LoadingGate;
pub use handler::{Console, Event};
pub use list::{ListCoordinator, Refresh};
pub use modes::DialogMode;
pub use notification::{Notice, NoticeKind, NotificationCenter};
pub use search_panel::{PanelIntent, SearchPanel};
