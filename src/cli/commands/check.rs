use crate::cli::commands::open_timetable;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `check` command: load, validate and describe the timetable.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let timetable = open_timetable(cli, cfg)?;
    let teachers = timetable.teacher_names();

    println!("📄 Rows          : {}", timetable.table().len());
    println!("🗂️  Columns       : {}", timetable.table().columns().join(", "));
    println!("🕘 Period columns: {}", timetable.periods().join(", "));
    println!("👩‍🏫 Teachers      : {}", teachers.len());

    if teachers.is_empty() {
        warning("No teacher names found in 'tname' column.");
    } else {
        success("Timetable is valid.");
    }
    Ok(())
}
