//! Play command - interactive lab session on stdin

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TracingObserver,
    cli::{
        config::SessionArgs,
        output, render_reply,
        script::{HELP, apply, parse_command},
    },
    session::LabSession,
};

#[derive(Parser, Debug)]
#[command(about = "Drive the agent interactively", allow_negative_numbers = true)]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session =
        LabSession::new(args.session.to_config()).with_observer(Box::new(TracingObserver::new()));

    output::print_section("Q-Learning Lab");
    println!("{HELP}");
    println!("  quit | exit | q              leave the session");
    output::print_session(&session, 10);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "exit" | "q") {
            break;
        }

        // Bad input never ends the session.
        match parse_command(trimmed) {
            Ok(Some(command)) => match apply(&mut session, command) {
                Ok(reply) => render_reply(&session, &reply),
                Err(err) => println!("  error: {err}"),
            },
            Ok(None) => {}
            Err(err) => println!("  error: {err}"),
        }
    }
    Ok(())
}
