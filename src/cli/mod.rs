//! CLI infrastructure for the Q-learning lab
//!
//! The CLI is a thin text front end over [`crate::session::LabSession`]:
//! `run` executes a script of lab commands, `play` reads them interactively.

pub mod commands;
pub mod config;
pub mod output;
pub mod script;

use crate::{q_learning::StepOutcome, session::LabSession};

use self::script::{HELP, Reply};

/// Print the outcome of one command in human-readable form.
pub fn render_reply(session: &LabSession, reply: &Reply) {
    match reply {
        Reply::Steps(steps) => {
            for step in steps {
                print_step(session, step);
            }
        }
        Reply::Undone(true) => println!("  undone, agent back at {}", session.agent_position()),
        Reply::Undone(false) => println!("  nothing to undo"),
        Reply::Edited(true) => {
            println!("  map edited, tables reset");
            print!("{}", output::format_grid(session));
        }
        Reply::Edited(false) => println!("  map is locked, edit ignored"),
        Reply::Message(message) => println!("  {message}"),
        Reply::Show => output::print_session(session, 10),
        Reply::Check(report) => print!("{}", output::format_report(report)),
        Reply::Exported { rows, path } => {
            println!("  wrote {rows} rows to {}", path.display())
        }
        Reply::Help => println!("{HELP}"),
    }
}

fn print_step(session: &LabSession, step: &StepOutcome) {
    println!("  {}", step.trace.log_line());
    println!("    Q = {}", step.trace.result);
    if step.terminal {
        println!(
            "    goal reached, agent restarts at {}",
            session.start_position()
        );
    }
}
