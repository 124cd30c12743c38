//! Text rendering layer for the console host.
//!
//! ```text
//! Console → view() → ConsoleView → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and pagination
//! - [`renderer`]: Top-level rendering coordinator
//! - `components`: Header, table, footer, and dialog renderers
//! - [`theme`]: Color schemes and ANSI escape sequences

mod components;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConsoleView, DialogView, FieldView, FooterInfo, HeaderInfo, NoticeView, Pager, RowView,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
