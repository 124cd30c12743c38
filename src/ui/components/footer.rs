//! Footer component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Pagination line followed by the selection/visibility summary.
pub fn render_footer(lines: &mut Vec<String>, footer: &FooterInfo, theme: &Theme) {
    lines.push(format!(
        "{}  {}  ({}/{})",
        footer.page_size,
        footer.range,
        footer.page + 1,
        footer.page_count
    ));

    let summary = match &footer.selected {
        Some(selected) => format!("{}  ·  {selected}", footer.visible),
        None => footer.visible.clone(),
    };
    lines.push(theme.paint(&theme.colors.text_dim, &summary));
}
