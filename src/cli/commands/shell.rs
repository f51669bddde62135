//! Interactive session: the view counter lives in memory for as long as the
//! shell runs and is gone when it exits.

use crate::cli::commands::view::print_outcome;
use crate::cli::commands::{open_timetable, print_status};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::gate::AttemptGate;
use crate::core::logic::Core;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::timetable::Timetable;
use crate::ui::messages::{header, info, notice, severity_message, success, warning};
use std::io::{self, BufRead, Write};

const SHELL_LOG_TARGET: &str = "shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Names(Option<String>),
    View(String),
    Status,
    /// Counter reset offered right after a view.
    Clear,
    /// Administrative counter reset.
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd.to_ascii_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "names" | "teachers" => {
                ShellCommand::Names((!rest.is_empty()).then(|| rest.to_string()))
            }
            "view" => ShellCommand::View(rest.to_string()),
            "status" => ShellCommand::Status,
            "clear" => ShellCommand::Clear,
            "reset" => ShellCommand::Reset,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

/// Handle the `shell` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.upload.as_deref() == Some("-") {
        return Err(AppError::Config(
            "--upload - cannot be used with shell: stdin is the shell input".into(),
        ));
    }

    let timetable = open_timetable(cli, cfg)?;
    let names = Core::require_teachers(&timetable)?;

    let pool = match DbPool::new(&cfg.database) {
        Ok(p) => p,
        Err(e) => {
            warning(format!("Internal log unavailable ({e}); using a temporary one."));
            DbPool::in_memory()?
        }
    };

    let mut gate = AttemptGate::with_limit(cfg.max_attempts);

    header("Teacher — Weekly Timetable Viewer");
    info(format!(
        "{} teachers loaded. Type 'help' for the list of commands.",
        names.len()
    ));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("ttviewer> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match ShellCommand::parse(&line?) {
            ShellCommand::Empty => {}
            ShellCommand::Names(query) => print_names(&timetable, query.as_deref()),
            ShellCommand::View(name) => {
                gate = shell_view(&timetable, &name, gate, &pool);
            }
            ShellCommand::Status => {
                if gate.locked() {
                    notice(&gate.block_notice());
                }
                print_status(&gate);
            }
            ShellCommand::Clear => {
                gate.reset();
                ttlog_quiet(&pool.conn, "clear", SHELL_LOG_TARGET, "Counter cleared after a view");
                success(format!("Counter cleared. {}", gate.status_line()));
            }
            ShellCommand::Reset => {
                gate.reset();
                ttlog_quiet(&pool.conn, "reset", SHELL_LOG_TARGET, "Counter reset");
                success(format!("Counter cleared. {}", gate.status_line()));
            }
            ShellCommand::Help => print_help(),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(cmd) => {
                warning(format!("Unknown command '{cmd}'. Type 'help'."))
            }
        }
    }

    ttlog_quiet(&pool.conn, "end", SHELL_LOG_TARGET, "Shell session ended");
    Ok(())
}

fn shell_view(timetable: &Timetable, name: &str, gate: AttemptGate, pool: &DbPool) -> AttemptGate {
    let (gate, result) = Core::view(timetable, Some(name), gate);

    match result {
        Ok(outcome) => {
            ttlog_quiet(
                &pool.conn,
                "view",
                SHELL_LOG_TARGET,
                &format!("Viewed timetable of {}", outcome.teacher),
            );
            print_outcome(&outcome);
            print_status(&gate);
            if !gate.locked() {
                info("Type 'clear' to reset the view counter.");
            }
        }
        Err(e) => {
            if matches!(e, AppError::AttemptsExhausted(_)) {
                ttlog_quiet(&pool.conn, "blocked", SHELL_LOG_TARGET, "View refused: limit reached");
            }
            severity_message(e.severity(), &e);
            if matches!(e, AppError::NameNotFound(_)) {
                warning(format!("Attempts left: {}", gate.remaining()));
            }
        }
    }

    gate
}

fn print_names(timetable: &Timetable, query: Option<&str>) {
    let names = match query {
        Some(q) => timetable.search(q),
        None => timetable.teacher_names(),
    };
    if names.is_empty() {
        warning("No teacher name matches.");
    }
    for n in names {
        println!("  {n}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  names [text]   list teacher names (optionally filtered)");
    println!("  view <name>    show a teacher's weekly timetable (counts as one view)");
    println!("  status         show how many views this session has used");
    println!("  clear          reset the view counter after a view");
    println!("  reset          reset the view counter");
    println!("  help           show this help");
    println!("  quit | exit    leave the shell");
}
