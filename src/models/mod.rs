pub mod cell;
pub mod day_summary;
pub mod notice;
pub mod table;
