use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use uuid::Uuid;

use crate::config::{ConfigError, GridConfig};

use super::types::{DayConfig, Draft, DraftField, ScheduleItem, Slot};

/// The schedule grid and its single-selection edit state.
///
/// All mutations go through the operations below. Inputs the grid cannot
/// act on (break-hour or out-of-grid selections, field edits with no
/// draft open) are ignored rather than reported.
pub struct ScheduleEditor {
    config: GridConfig,
    days: Vec<DayConfig>,
    items: HashMap<Slot, ScheduleItem>,
    draft: Option<Draft>,
    rng: Box<dyn RngCore + Send>,
}

impl ScheduleEditor {
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds an editor with a caller-supplied color source. Tests seed
    /// this for repeatable drafts.
    pub fn with_rng<R>(config: GridConfig, rng: R) -> Result<Self, ConfigError>
    where
        R: RngCore + Send + 'static,
    {
        config.validate()?;
        let days = config
            .day_names
            .iter()
            .enumerate()
            .map(|(id, name)| DayConfig {
                id: id as u8,
                name: name.clone(),
            })
            .collect();
        Ok(Self {
            config,
            days,
            items: HashMap::new(),
            draft: None,
            rng: Box::new(rng),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn days(&self) -> &[DayConfig] {
        &self.days
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// The slot currently open for editing, if any.
    pub fn selection(&self) -> Option<Slot> {
        self.draft.as_ref().map(|d| d.slot)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn lookup(&self, day: u8, hour: u8) -> Option<&ScheduleItem> {
        self.items.get(&Slot { day, hour })
    }

    /// Opens a draft for the given slot. An occupied slot prefills the
    /// draft from the item there; an empty slot starts blank with a random
    /// palette color. Break-hour and out-of-grid slots are ignored and any
    /// open draft stays as it was.
    pub fn select_slot(&mut self, day: u8, hour: u8) {
        let slot = Slot { day, hour };
        if hour == self.config.break_hour || !self.in_grid(slot) {
            return;
        }
        let draft = match self.items.get(&slot).cloned() {
            Some(item) => Draft {
                slot,
                existing_id: Some(item.id),
                title: item.title,
                room: item.room.unwrap_or_default(),
                color: item.color,
            },
            None => Draft {
                slot,
                existing_id: None,
                title: String::new(),
                room: String::new(),
                color: self.random_color(),
            },
        };
        self.draft = Some(draft);
    }

    /// Writes one field of the open draft. Does nothing without a draft.
    /// Color values not in the palette are ignored.
    pub fn update_draft_field(&mut self, field: DraftField, value: String) {
        if field == DraftField::Color && !self.config.palette.contains(&value) {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            match field {
                DraftField::Title => draft.title = value,
                DraftField::Room => draft.room = value,
                DraftField::Color => draft.color = value,
            }
        }
    }

    /// Commits the open draft into the grid and clears the selection.
    /// Returns false without touching anything when there is no draft or
    /// the title is blank. A draft on an occupied slot keeps that item's
    /// id; a blank room is stored as no room.
    pub fn save(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) if !draft.title.trim().is_empty() => {
                let id = draft.existing_id.unwrap_or_else(new_item_id);
                let room = if draft.room.trim().is_empty() {
                    None
                } else {
                    Some(draft.room)
                };
                debug!(
                    "saved item {} at day {} hour {}",
                    id, draft.slot.day, draft.slot.hour
                );
                self.items.insert(
                    draft.slot,
                    ScheduleItem {
                        id,
                        day: draft.slot.day,
                        hour: draft.slot.hour,
                        title: draft.title,
                        room,
                        color: draft.color,
                    },
                );
                true
            }
            skipped => {
                self.draft = skipped;
                false
            }
        }
    }

    /// Removes the item in the selected slot, if the slot holds one, and
    /// closes the draft either way.
    pub fn delete_selected(&mut self) {
        if let Some(draft) = self.draft.take() {
            if let Some(removed) = self.items.remove(&draft.slot) {
                debug!(
                    "deleted item {} at day {} hour {}",
                    removed.id, draft.slot.day, draft.slot.hour
                );
            }
        }
    }

    /// Closes the draft without committing it.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Renames a day column. Unknown ids are ignored.
    pub fn rename_day(&mut self, day_id: u8, new_name: String) {
        if let Some(day) = self.days.iter_mut().find(|d| d.id == day_id) {
            day.name = new_name;
        }
    }

    /// Empties the whole grid and discards any open draft.
    pub fn clear_all(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        self.draft = None;
        debug!("cleared {} items", removed);
    }

    fn in_grid(&self, slot: Slot) -> bool {
        (slot.day as usize) < self.days.len()
            && slot.hour >= self.config.start_hour
            && slot.hour <= self.config.end_hour
    }

    fn random_color(&mut self) -> String {
        let index = self.rng.gen_range(0..self.config.palette.len());
        self.config.palette[index].clone()
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}
