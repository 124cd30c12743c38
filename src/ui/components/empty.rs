//! Empty state renderer, shown instead of the table when no rows are listed.

use crate::ui::theme::Theme;

pub fn render_empty_state(lines: &mut Vec<String>, message: &str, theme: &Theme) {
    lines.push(String::new());
    lines.push(format!("    {}", theme.paint(&theme.colors.text_dim, message)));
    lines.push(String::new());
}
