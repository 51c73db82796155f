//! Reusable TUI widgets.

pub mod form;
pub mod keyboard;
pub mod status_bar;

pub use form::{FormLayout, draw_row_frame, form_layout};
pub use keyboard::{draw_keyboard, key_at};
pub use status_bar::{StatusBarContext, draw_status_bar};
