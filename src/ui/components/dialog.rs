//! Record dialog renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogView;

pub fn render_dialog(lines: &mut Vec<String>, dialog: &DialogView, theme: &Theme) {
    lines.push(String::new());
    lines.push(theme.paint(&theme.colors.header_fg, &format!("┌ {}", dialog.title)));

    for field in &dialog.fields {
        let marker = if field.editable { ' ' } else { '·' };
        lines.push(format!(
            "│{marker}{:<14} {:<24} ({})",
            field.label, field.value, field.key
        ));
    }

    let buttons = match &dialog.confirm {
        Some(confirm) => format!("[{confirm}] [{}]", dialog.cancel),
        None => format!("[{}]", dialog.cancel),
    };
    lines.push(format!("└ {buttons}"));
}
