//! Output formatting and display

pub mod display;
pub mod formatters;
