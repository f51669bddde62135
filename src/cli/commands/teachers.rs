use crate::cli::commands::open_timetable;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `teachers` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Teachers { search } = &cli.command {
        let timetable = open_timetable(cli, cfg)?;
        let names = Core::require_teachers(&timetable)?;

        let names = match search {
            Some(q) => timetable.search(q),
            None => names,
        };

        if names.is_empty() {
            warning("No teacher name matches the search.");
            return Ok(());
        }

        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
