use crate::cli::commands::{open_timetable, print_status};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::flow::ViewOutcome;
use crate::core::logic::Core;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::sessions::{load_session, save_session};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::{header, notice, success, warning};
use crate::utils::formatting::bold;
use crate::utils::path::expand_tilde;
use crate::utils::table::TextTable;

/// Handle the `view` command: one view request against the stored session.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        name,
        export,
        format,
        force,
    } = &cli.command
    {
        let timetable = open_timetable(cli, cfg)?;
        let pool = DbPool::new(&cfg.database)?;
        let gate = load_session(&pool.conn, &cli.session, cfg.max_attempts)?;

        let input = name.join(" ");
        let (gate, result) = Core::view(&timetable, Some(&input), gate);
        save_session(&pool.conn, &cli.session, &gate)?;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                match &e {
                    AppError::AttemptsExhausted(_) => {
                        ttlog_quiet(&pool.conn, "blocked", &cli.session, "View refused: limit reached")
                    }
                    AppError::NameNotFound(_) => {
                        warning(format!("Attempts left: {}", gate.remaining()))
                    }
                    _ => {}
                }
                return Err(e);
            }
        };

        ttlog_quiet(
            &pool.conn,
            "view",
            &cli.session,
            &format!("Viewed timetable of {}", outcome.teacher),
        );

        print_outcome(&outcome);
        print_status(&gate);

        if let Some(file) = export {
            ExportLogic::export(&outcome, format, &expand_tilde(file), *force)?;
        }
    }
    Ok(())
}

/// Print a delivered view: rows, totals and the threshold notice.
pub(crate) fn print_outcome(outcome: &ViewOutcome) {
    success(format!("Found timetable for: {}", outcome.teacher));
    header(format!("Weekly timetable for {}", outcome.teacher));
    print!("{}", TextTable::from(&outcome.rows).render());

    println!(
        "\n{} {}",
        bold("Total periods this week:"),
        outcome.summary.total
    );

    if !outcome.summary.per_day.is_empty() {
        println!("Periods per day:");
        let mut t = TextTable::new(&["day", "periods_on_day"][..]);
        for d in &outcome.summary.per_day {
            t.add_row(vec![d.day.clone(), d.periods_on_day.to_string()]);
        }
        print!("{}", t.render());
    }

    if let Some(n) = &outcome.notice {
        notice(n);
    }
}
