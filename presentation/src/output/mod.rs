//! Output formatting for turns, capability listings and health reports

pub mod console;
pub mod formatter;
pub mod json;
