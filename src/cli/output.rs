//! Output formatting for the CLI

use std::fmt::Write as _;

use crate::{
    gridworld::{Action, Position},
    q_learning::{StepTrace, ValidationReport},
    session::LabSession,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the grid with the agent drawn as `A`.
pub fn format_grid(session: &LabSession) -> String {
    let grid = session.grid();
    let agent = session.agent_position();
    let mut out = String::new();
    for y in 0..grid.rows() {
        let row: Vec<String> = (0..grid.cols())
            .map(|x| {
                let pos = Position::new(x, y);
                if pos == agent {
                    "A".to_string()
                } else {
                    grid.cell_at(pos).kind.to_char().to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", row.join(" "));
    }
    out
}

/// Render both tables side by side as `reference | user` per action.
pub fn format_table(session: &LabSession) -> String {
    let mut out = String::new();
    let _ = write!(out, "  {:8}", "state");
    for action in Action::ALL {
        let _ = write!(out, " {:>17}", action.as_str());
    }
    out.push('\n');

    let agent = session.agent_position();
    let user = session.user_table();
    for (pos, values) in session.reference_table().iter() {
        let marker = if pos == agent { '*' } else { ' ' };
        let _ = write!(out, "{marker} {:8}", pos.to_string());
        for action in Action::ALL {
            let raw = user.raw(pos, action).unwrap_or_default();
            let _ = write!(out, " {:>8.2} | {:<6}", values.get(action), raw);
        }
        out.push('\n');
    }
    out
}

/// Render the arithmetic of one update step.
pub fn format_trace(trace: &StepTrace, alpha: f64, gamma: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  s = {}  a = {}  r = {}  s' = {}",
        trace.state, trace.action, trace.reward, trace.next_state
    );
    if trace.terminal {
        let _ = writeln!(out, "  target = r = {} (goal)", trace.target);
    } else {
        let _ = writeln!(
            out,
            "  target = r + γ·max Q(s') = {} + {} · {} = {}",
            trace.reward, gamma, trace.max_next_q, trace.target
        );
    }
    let _ = writeln!(
        out,
        "  Q(s,a) = (1 - {alpha}) · {} + {alpha} · {} = {}",
        trace.old_q, trace.target, trace.result
    );
    out
}

/// Render a validation report: score line plus every wrong entry.
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}/{} entries correct", report.correct(), report.total());
    for entry in report.mistakes() {
        let _ = writeln!(
            out,
            "  ✗ Q{}[{}]: you entered '{}', expected {}",
            entry.position, entry.action, entry.raw, entry.expected
        );
    }
    out
}

/// Print grid, tables, last step and recent log lines.
pub fn print_session(session: &LabSession, log_lines: usize) {
    print_subsection("Grid");
    print!("{}", format_grid(session));
    print_kv("agent", &session.agent_position().to_string());
    print_kv("start", &session.start_position().to_string());
    print_kv(
        "alpha / gamma",
        &format!(
            "{} / {}",
            session.settings().learning_rate,
            session.settings().discount_factor
        ),
    );
    print_kv(
        "goal / trap",
        &format!("{} / {}", session.rewards().goal, session.rewards().trap),
    );
    print_kv("can undo", &session.can_undo().to_string());

    print_subsection("Q-table (reference | yours)");
    print!("{}", format_table(session));

    if let Some(trace) = session.last_step() {
        print_subsection("Last step");
        let settings = session.settings();
        print!(
            "{}",
            format_trace(trace, settings.learning_rate, settings.discount_factor)
        );
    }

    if !session.log().is_empty() {
        print_subsection("Event log");
        for line in session.log().iter().take(log_lines) {
            println!("  {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::SessionConfig, gridworld::CellType};

    #[test]
    fn test_format_grid_marks_agent() {
        let mut session = LabSession::new(SessionConfig::new(2, 3));
        session
            .place_cell(Position::new(2, 1), CellType::Goal)
            .unwrap();
        assert_eq!(format_grid(&session), "  A . .\n  . . G\n");
    }

    #[test]
    fn test_format_report_lists_mistakes() {
        let mut session = LabSession::new(SessionConfig::new(2, 2));
        session
            .set_user_value(Position::new(1, 0), Action::Down, "3")
            .unwrap();
        let text = format_report(&session.validate());
        assert!(text.contains("15/16 entries correct"));
        assert!(text.contains("Q(1,0)[DOWN]: you entered '3', expected 0"));
    }
}
