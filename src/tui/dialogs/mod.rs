//! Dialog windows drawn over the main view

pub mod help;
pub mod income;
