//! Table component renderer.
//!
//! Columns: checkbox, id, name, start date, status, department. Widths are
//! fixed; longer cells are truncated on a character boundary.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::RowView;

const WIDTHS: [usize; 5] = [10, 16, 12, 8, 12];

fn cell(text: &str, width: usize) -> String {
    let clipped: String = text.chars().take(width).collect();
    format!("{clipped:<width$}")
}

/// Column header line; `columns` holds the five localized titles.
pub fn render_table_headers(lines: &mut Vec<String>, columns: &[String; 5], theme: &Theme) {
    let header: Vec<String> = columns
        .iter()
        .zip(WIDTHS)
        .map(|(title, width)| cell(title, width))
        .collect();
    let line = format!("    {}", header.join(" "));
    lines.push(theme.paint(&theme.colors.header_fg, &line));
}

/// One line per row; selected rows are checked and highlighted.
pub fn render_table_rows(lines: &mut Vec<String>, rows: &[RowView], theme: &Theme) {
    for row in rows {
        let checkbox = if row.selected { "[x]" } else { "[ ]" };
        let cells = [&row.id, &row.name, &row.start_date, &row.status, &row.department];
        let body: Vec<String> = cells
            .iter()
            .zip(WIDTHS)
            .map(|(text, width)| cell(text, width))
            .collect();
        let line = format!("{checkbox} {}", body.join(" "));

        if row.selected {
            lines.push(theme.paint(&theme.colors.selection_fg, &line));
        } else {
            lines.push(line);
        }
    }
}
