//! Read-only projection of the editor for rendering. Building a view never
//! changes editor state.

use serde::Serialize;

use crate::schedule::hours::{hour_label, hour_range};
use crate::schedule::{Draft, ScheduleEditor, ScheduleItem, Slot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourHeader {
    pub hour: u8,
    pub label: String,
    pub end_label: String,
    pub is_break: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellView {
    Break,
    Empty,
    Occupied { item: ScheduleItem },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub id: u8,
    pub name: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub hours: Vec<HourHeader>,
    pub days: Vec<DayRow>,
    pub palette: Vec<String>,
    pub selection: Option<Slot>,
    pub draft: Option<Draft>,
}

/// Projects the whole grid, one row per day with one cell per hour, plus
/// the palette and the current draft for the edit form.
pub fn editor_view(editor: &ScheduleEditor) -> EditorView {
    let config = editor.config();
    let hours: Vec<HourHeader> = hour_range(config.start_hour, config.end_hour)
        .into_iter()
        .map(|hour| HourHeader {
            hour,
            label: hour_label(hour),
            end_label: hour_label(hour + 1),
            is_break: hour == config.break_hour,
        })
        .collect();

    let days = editor
        .days()
        .iter()
        .map(|day| DayRow {
            id: day.id,
            name: day.name.clone(),
            cells: hours
                .iter()
                .map(|header| {
                    if header.is_break {
                        CellView::Break
                    } else {
                        match editor.lookup(day.id, header.hour) {
                            Some(item) => CellView::Occupied { item: item.clone() },
                            None => CellView::Empty,
                        }
                    }
                })
                .collect(),
        })
        .collect();

    EditorView {
        hours,
        days,
        palette: config.palette.clone(),
        selection: editor.selection(),
        draft: editor.draft().cloned(),
    }
}
