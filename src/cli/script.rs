//! Lab command language shared by `run` and `play`
//!
//! One command per line; blank lines and `#` comments are skipped. `;`
//! separates several commands on one line.

use std::path::PathBuf;

use crate::{
    Error, Result,
    export::TableCsvExporter,
    gridworld::{Action, CellType, Position, RewardKind},
    q_learning::{StepOutcome, ValidationReport},
    session::LabSession,
};

/// Help text listing every command
pub const HELP: &str = "\
commands:
  up | down | left | right     move the agent one step
  random [N]                   take N uniformly random steps (default 1)
  undo                         revert the most recent step
  reset                        zero both tables, clear log and history
  rotate X Y                   cycle the cell type at (X,Y)
  set-cell X Y TYPE            place empty|wall|trap|goal|start at (X,Y)
  resize ROWS COLS             change the grid size (2..8)
  reward goal|trap VALUE       change a configured reward
  alpha V | gamma V            change the learning rate or discount factor
  enter X Y ACTION VALUE       fill in your own Q(X,Y,ACTION)
  lock | unlock                block or allow map edits
  show                         print grid, tables and the last step
  check                        compare your table with the reference
  export PATH                  write the comparison as CSV
  help                         show this list";

/// A parsed lab command
#[derive(Debug, Clone, PartialEq)]
pub enum LabCommand {
    Move(Action),
    Random(usize),
    Undo,
    Reset,
    Rotate(Position),
    SetCell(Position, CellType),
    Resize { rows: usize, cols: usize },
    Reward(RewardKind, f64),
    Alpha(f64),
    Gamma(f64),
    Enter(Position, Action, String),
    Lock,
    Unlock,
    Show,
    Check,
    Export(PathBuf),
    Help,
}

/// What a command did, for the caller to render
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Steps(Vec<StepOutcome>),
    Undone(bool),
    Edited(bool),
    Message(String),
    Show,
    Check(ValidationReport),
    Exported { rows: usize, path: PathBuf },
    Help,
}

fn parse_error(line: &str, reason: impl Into<String>) -> Error {
    Error::ParseCommand {
        line: line.to_string(),
        reason: reason.into(),
    }
}

fn parse_number<T: std::str::FromStr>(line: &str, token: Option<&str>, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| parse_error(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| parse_error(line, format!("'{token}' is not a valid {what}")))
}

fn parse_position<'a>(line: &str, tokens: &mut impl Iterator<Item = &'a str>) -> Result<Position> {
    let x = parse_number(line, tokens.next(), "column")?;
    let y = parse_number(line, tokens.next(), "row")?;
    Ok(Position::new(x, y))
}

/// Parse one command. Returns `Ok(None)` for blank lines and comments.
pub fn parse_command(line: &str) -> Result<Option<LabCommand>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut tokens = content.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "up" | "down" | "left" | "right" | "u" | "d" | "l" | "r" => LabCommand::Move(head.parse()?),
        "random" => match tokens.next() {
            Some(count) => LabCommand::Random(parse_number(line, Some(count), "step count")?),
            None => LabCommand::Random(1),
        },
        "undo" => LabCommand::Undo,
        "reset" => LabCommand::Reset,
        "rotate" => LabCommand::Rotate(parse_position(line, &mut tokens)?),
        "set-cell" => {
            let pos = parse_position(line, &mut tokens)?;
            let kind = tokens
                .next()
                .ok_or_else(|| parse_error(line, "missing cell type"))?
                .parse()?;
            LabCommand::SetCell(pos, kind)
        }
        "resize" => LabCommand::Resize {
            rows: parse_number(line, tokens.next(), "row count")?,
            cols: parse_number(line, tokens.next(), "column count")?,
        },
        "reward" => {
            let kind = tokens
                .next()
                .ok_or_else(|| parse_error(line, "missing reward kind"))?
                .parse()?;
            LabCommand::Reward(kind, parse_number(line, tokens.next(), "reward")?)
        }
        "alpha" => LabCommand::Alpha(parse_number(line, tokens.next(), "learning rate")?),
        "gamma" => LabCommand::Gamma(parse_number(line, tokens.next(), "discount factor")?),
        "enter" => {
            let pos = parse_position(line, &mut tokens)?;
            let action = tokens
                .next()
                .ok_or_else(|| parse_error(line, "missing action"))?
                .parse()?;
            let raw = tokens.collect::<Vec<_>>().join(" ");
            LabCommand::Enter(pos, action, raw)
        }
        "lock" => LabCommand::Lock,
        "unlock" => LabCommand::Unlock,
        "show" => LabCommand::Show,
        "check" => LabCommand::Check,
        "export" => {
            let path = tokens
                .next()
                .ok_or_else(|| parse_error(line, "missing output path"))?;
            LabCommand::Export(PathBuf::from(path))
        }
        "help" | "?" => LabCommand::Help,
        other => return Err(parse_error(line, format!("unknown command '{other}'"))),
    };

    Ok(Some(command))
}

/// Parse a script, splitting lines on newlines and `;`.
pub fn parse_script(text: &str) -> Result<Vec<LabCommand>> {
    let mut commands = Vec::new();
    for line in text.lines().flat_map(|l| l.split(';')) {
        if let Some(command) = parse_command(line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Run one command against `session`.
pub fn apply(session: &mut LabSession, command: LabCommand) -> Result<Reply> {
    let reply = match command {
        LabCommand::Move(action) => Reply::Steps(vec![session.perform_action(action)?]),
        LabCommand::Random(count) => {
            let steps = (0..count)
                .map(|_| session.random_step())
                .collect::<Result<Vec<_>>>()?;
            Reply::Steps(steps)
        }
        LabCommand::Undo => Reply::Undone(session.undo()?),
        LabCommand::Reset => {
            session.reset_tables()?;
            Reply::Message("tables reset".to_string())
        }
        LabCommand::Rotate(pos) => Reply::Edited(session.rotate_cell(pos)?),
        LabCommand::SetCell(pos, kind) => {
            session.place_cell(pos, kind)?;
            Reply::Edited(true)
        }
        LabCommand::Resize { rows, cols } => {
            session.resize(rows, cols)?;
            let grid = session.grid();
            Reply::Message(format!("grid is now {}x{}", grid.rows(), grid.cols()))
        }
        LabCommand::Reward(kind, value) => {
            let updated = session.apply_reward_config(kind, value);
            Reply::Message(format!("{kind} reward = {value} ({updated} cells updated)"))
        }
        LabCommand::Alpha(value) => {
            session.set_learning_rate(value);
            Reply::Message(format!("alpha = {value}"))
        }
        LabCommand::Gamma(value) => {
            session.set_discount_factor(value);
            Reply::Message(format!("gamma = {value}"))
        }
        LabCommand::Enter(pos, action, raw) => {
            let message = format!("Q{pos}[{action}] := {raw}");
            session.set_user_value(pos, action, raw)?;
            Reply::Message(message)
        }
        LabCommand::Lock => {
            session.set_editing(false);
            Reply::Message("map locked".to_string())
        }
        LabCommand::Unlock => {
            session.set_editing(true);
            Reply::Message("map unlocked".to_string())
        }
        LabCommand::Show => Reply::Show,
        LabCommand::Check => Reply::Check(session.validate()),
        LabCommand::Export(path) => {
            let rows = TableCsvExporter::export(&session.validate(), &path)?;
            Reply::Exported { rows, path }
        }
        LabCommand::Help => Reply::Help,
    };
    Ok(reply)
}
