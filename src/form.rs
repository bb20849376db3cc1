//! Request payloads for the editing API and their validation.
//!
//! The core editor silently ignores selections and values it cannot use.
//! The HTTP layer is stricter: payloads that could never apply to the
//! configured grid are rejected up front so callers see what went wrong.

use serde::Deserialize;

use crate::config::GridConfig;
use crate::schedule::DraftField;

#[derive(Debug, Deserialize)]
pub struct SelectSlotRequest {
    pub day: u8,
    pub hour: u8,
}

#[derive(Debug, Deserialize)]
pub struct DraftFieldRequest {
    pub field: DraftField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameDayRequest {
    pub id: u8,
    pub name: String,
}

pub fn validate_select(request: &SelectSlotRequest, config: &GridConfig) -> Result<(), String> {
    if request.day as usize >= config.day_names.len() {
        return Err(format!("Unknown day index: {}", request.day));
    }
    if request.hour < config.start_hour || request.hour > config.end_hour {
        return Err(format!(
            "Hour {} is outside the grid ({}..={})",
            request.hour, config.start_hour, config.end_hour
        ));
    }
    Ok(())
}

pub fn validate_draft_field(
    request: &DraftFieldRequest,
    config: &GridConfig,
) -> Result<(), String> {
    if request.field == DraftField::Color && !config.palette.contains(&request.value) {
        return Err(format!("Unknown color token: {}", request.value));
    }
    Ok(())
}

pub fn validate_rename(request: &RenameDayRequest, config: &GridConfig) -> Result<(), String> {
    if request.id as usize >= config.day_names.len() {
        return Err(format!("Unknown day id: {}", request.id));
    }
    Ok(())
}
