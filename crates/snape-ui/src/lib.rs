mod common;
mod picker;
mod theme;

// Public API
pub use picker::{display_snippet_picker, to_picker_event, PickerOptions};
pub use theme::Palette;
