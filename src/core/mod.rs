//! Core module: spreadsheet decoding, records and import state.
//!
//! Nothing in here draws; the GUI reads from `inventory::InventoryState`.

pub mod cell;
pub mod config;
pub mod error;
pub mod import;
pub mod inventory;
pub mod progress;
pub mod record;
pub mod workbook;

#[cfg(test)]
mod fixtures;
