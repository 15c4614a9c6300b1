// Week View Chip Library
// Exports all modules for testing and reuse

pub mod models;
pub mod ui_egui;
