//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: [`Console::view`](crate::app::Console::view)
//!    turns the console state into a [`ConsoleView`]
//! 2. **Component Rendering**: the components turn the view into text lines
//!
//! The result is returned as a string rather than printed, so the host decides
//! where it goes and tests can inspect it.

use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConsoleView;

/// Renders a view model into newline-separated text.
#[must_use]
pub fn render(view: &ConsoleView, theme: &Theme) -> String {
    let mut text = components::render_console(view, theme).join("\n");
    text.push('\n');
    text
}
