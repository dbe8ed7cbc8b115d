pub mod schedule;
pub mod script_analysis;
