//! Header and notice line renderers.

use crate::app::NoticeKind;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, NoticeView};

/// Title line, with the locale tag and the busy label when the gate is engaged.
pub fn render_header(lines: &mut Vec<String>, header: &HeaderInfo, busy: Option<&str>, theme: &Theme) {
    let title = theme.paint(&theme.colors.header_fg, &header.title);
    let mut line = format!("{title} [{}]", header.locale);
    if let Some(label) = busy {
        line.push_str("  ");
        line.push_str(&theme.paint(&theme.colors.text_dim, label));
    }
    lines.push(line);
}

pub fn render_notice(lines: &mut Vec<String>, notice: &NoticeView, theme: &Theme) {
    let (marker, color) = match notice.kind {
        NoticeKind::Success => ("✔", &theme.colors.success),
        NoticeKind::Warning => ("!", &theme.colors.warning),
        NoticeKind::Error => ("✖", &theme.colors.error),
    };
    lines.push(theme.paint(color, &format!("{marker} {}", notice.message)));
}
