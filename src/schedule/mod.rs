pub mod editor;
pub mod hours;
pub mod types;

pub use editor::ScheduleEditor;
pub use types::{DayConfig, Draft, DraftField, ScheduleItem, Slot};
