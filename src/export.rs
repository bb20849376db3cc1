use std::error::Error;

use csv::WriterBuilder;

use crate::schedule::hours::{hour_label, hour_range};
use crate::schedule::ScheduleEditor;

/// Renders the occupied slots as a CSV document, day by day in column
/// order and hour by hour within each day. Empty and break slots are
/// omitted.
pub fn timetable_csv(editor: &ScheduleEditor) -> Result<String, Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(&["day", "day_name", "time", "title", "room", "color"])?;

    let config = editor.config();
    for day in editor.days() {
        for hour in hour_range(config.start_hour, config.end_hour) {
            if let Some(item) = editor.lookup(day.id, hour) {
                let day_id = day.id.to_string();
                let time = hour_label(hour);
                wtr.write_record(&[
                    day_id.as_str(),
                    &day.name,
                    &time,
                    &item.title,
                    item.room.as_deref().unwrap_or(""),
                    &item.color,
                ])?;
            }
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::schedule::DraftField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn editor() -> ScheduleEditor {
        ScheduleEditor::with_rng(GridConfig::default(), StdRng::seed_from_u64(3)).unwrap()
    }

    fn create_item(editor: &mut ScheduleEditor, day: u8, hour: u8, title: &str, room: &str) {
        editor.select_slot(day, hour);
        editor.update_draft_field(DraftField::Title, title.to_string());
        editor.update_draft_field(DraftField::Room, room.to_string());
        assert!(editor.save());
    }

    #[test]
    fn empty_grid_exports_header_only() {
        let csv = timetable_csv(&editor()).unwrap();
        assert_eq!(csv.trim_end(), "day,day_name,time,title,room,color");
    }

    #[test]
    fn rows_come_out_day_major() {
        let mut editor = editor();
        create_item(&mut editor, 3, 9, "Art", "");
        create_item(&mut editor, 0, 15, "Math", "B12");
        create_item(&mut editor, 0, 8, "History", "");

        let csv = timetable_csv(&editor).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,Monday,08:00,History"));
        assert!(lines[2].starts_with("0,Monday,15:00,Math,B12"));
        assert!(lines[3].starts_with("3,Thursday,09:00,Art"));
    }

    #[test]
    fn missing_room_exports_as_blank_field() {
        let mut editor = editor();
        create_item(&mut editor, 1, 10, "Gym", "   ");
        let csv = timetable_csv(&editor).unwrap();
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[3], "Gym");
        assert_eq!(fields[4], "");
    }

    #[test]
    fn times_are_zero_padded() {
        let mut editor = editor();
        create_item(&mut editor, 2, 8, "Reading", "");
        let csv = timetable_csv(&editor).unwrap();
        assert!(csv.contains("2,Wednesday,08:00,Reading"));
    }
}
