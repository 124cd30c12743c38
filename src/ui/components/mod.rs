//! Composable console component renderers.
//!
//! Each component appends its lines to a shared buffer. The layout is fixed:
//!
//! ```text
//! [Header]            title, locale, busy label
//! [Notice]            only while a notice is visible
//! [Border]
//! [Table | Empty]     current page of rows
//! [Border]
//! [Footer]            range, totals, selection
//! [Dialog]            only while the dialog is open
//! ```

mod dialog;
mod empty;
mod footer;
mod header;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConsoleView;

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, render_notice};
use table::{render_table_headers, render_table_rows};

const BORDER_WIDTH: usize = 72;

fn render_border(lines: &mut Vec<String>, theme: &Theme) {
    lines.push(theme.paint(&theme.colors.border, &"─".repeat(BORDER_WIDTH)));
}

/// Renders the whole console into lines.
pub fn render_console(view: &ConsoleView, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();

    render_header(&mut lines, &view.header, view.busy.as_deref(), theme);
    if let Some(notice) = &view.notice {
        render_notice(&mut lines, notice, theme);
    }
    render_border(&mut lines, theme);

    match &view.empty_state {
        Some(message) => render_empty_state(&mut lines, message, theme),
        None => {
            render_table_headers(&mut lines, &view.columns, theme);
            render_table_rows(&mut lines, &view.rows, theme);
        }
    }

    render_border(&mut lines, theme);
    render_footer(&mut lines, &view.footer, theme);

    if let Some(dialog) = &view.dialog {
        render_dialog(&mut lines, dialog, theme);
    }
    lines
}
