use serde::{Deserialize, Serialize};

/// A cell coordinate in the grid: day column index and hour row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: u8,
    pub hour: u8,
}

/// A renameable day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConfig {
    pub id: u8,
    pub name: String,
}

/// A scheduled entry occupying one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub day: u8,
    pub hour: u8,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub color: String,
}

/// The in-progress edit for the selected slot. Holds raw form text; nothing
/// is normalized until the draft is saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draft {
    pub slot: Slot,
    /// Id of the item being edited, if the slot was occupied when selected.
    pub existing_id: Option<String>,
    pub title: String,
    pub room: String,
    pub color: String,
}

/// The draft fields a form edit can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Room,
    Color,
}
