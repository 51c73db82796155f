mod choice;
mod drag;
pub mod keyboard;
mod record;
mod scroll;
mod status;
mod widget;

pub use choice::{Choice, cycle_index, palette};
pub use drag::{DRAGGED_MESSAGE, DragError, DragPayload, FreeDrag, GRID_SLOTS, GridItem, SwapGrid};
pub use keyboard::{KeyboardKey, VirtualKeyboard};
pub use record::StatusRecord;
pub use scroll::{SCROLL_THRESHOLD, ScrollRegion, progress_message, scrolled_fraction};
pub use status::{FieldStatus, FieldValue, TIMESTAMP_FORMAT};
pub use widget::WidgetId;
