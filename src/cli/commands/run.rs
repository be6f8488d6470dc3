//! Run command - execute a script of lab commands and print the final state

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::TracingObserver,
    cli::{
        config::SessionArgs,
        output, render_reply,
        script::{apply, parse_script},
    },
    session::LabSession,
};

#[derive(Parser, Debug)]
#[command(about = "Run a script of lab commands", allow_negative_numbers = true)]
pub struct RunArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Read commands from this file (one per line)
    #[arg(long, short = 's')]
    pub script: Option<PathBuf>,

    /// Print the final session state as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Number of log lines to show at the end
    #[arg(long, default_value_t = 10)]
    pub log_lines: usize,

    /// Commands to run after the script (e.g. "rotate 3 3" right down)
    pub commands: Vec<String>,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let mut text = String::new();
    if let Some(path) = &args.script {
        text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        text.push('\n');
    }
    for command in &args.commands {
        text.push_str(command);
        text.push('\n');
    }

    let commands = parse_script(&text).context("Failed to parse lab commands")?;
    let mut session =
        LabSession::new(args.session.to_config()).with_observer(Box::new(TracingObserver::new()));

    for command in commands {
        let label = format!("{command:?}");
        let reply =
            apply(&mut session, command).with_context(|| format!("Command failed: {label}"))?;
        if !args.json {
            render_reply(&session, &reply);
        }
    }

    if args.json {
        println!("{}", session.snapshot().to_json_pretty()?);
    } else {
        output::print_section("Final state");
        output::print_session(&session, args.log_lines);
    }
    Ok(())
}
