// Timegrid library
// Exports all modules so the binary, the integration tests, and embedders
// share one crate.

pub mod config;
pub mod export;
pub mod form;
pub mod schedule;
pub mod theme;
pub mod view;
pub mod web;
