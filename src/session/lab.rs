//! Lab session controller
//!
//! Owns the grid, both Q-tables, the event log and the undo history, and
//! sequences every mutation the presentation layer can request.

use std::{collections::VecDeque, fmt};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    history::{History, HistoryEntry},
    snapshot::SessionSnapshot,
};
use crate::{
    Error, Result,
    app::SessionConfig,
    gridworld::{Action, CellType, Grid, Position, RewardConfig, RewardKind, clamp_side},
    ports::{LabObserver, ResetReason},
    q_learning::{QTable, Settings, StepOutcome, StepTrace, UserQTable, ValidationReport, apply_step},
};

/// Log line inserted when the agent reaches a goal
pub const GOAL_LOG_LINE: &str = "--- GOAL REACHED (restarting) ---";

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// A single learner's lab session.
///
/// The grid and both tables always agree on the number of cells: any
/// structural edit (resize, cell rotation or placement) rebuilds the tables and
/// drops the history. Reward edits only rewrite cell rewards.
pub struct LabSession {
    grid: Grid,
    settings: Settings,
    rewards: RewardConfig,
    agent: Position,
    start: Position,
    reference: QTable,
    user: UserQTable,
    log: VecDeque<String>,
    last_step: Option<StepTrace>,
    history: History,
    editing: bool,
    rng: StdRng,
    observers: Vec<Box<dyn LabObserver>>,
}

impl LabSession {
    /// Create a session with an empty grid, zeroed tables and the agent at (0,0).
    pub fn new(config: SessionConfig) -> Self {
        let (rows, cols) = config.dimensions();
        Self {
            grid: Grid::new(rows, cols),
            settings: config.settings,
            rewards: config.rewards,
            agent: Position::ORIGIN,
            start: Position::ORIGIN,
            reference: QTable::new(rows, cols),
            user: UserQTable::new(rows, cols),
            log: VecDeque::new(),
            last_step: None,
            history: History::new(),
            editing: true,
            rng: build_rng(config.seed),
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn LabObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn LabObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, mut event: impl FnMut(&mut dyn LabObserver) -> Result<()>) -> Result<()> {
        for observer in &mut self.observers {
            event(observer.as_mut())?;
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }

    pub fn agent_position(&self) -> Position {
        self.agent
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn reference_table(&self) -> &QTable {
        &self.reference
    }

    pub fn user_table(&self) -> &UserQTable {
        &self.user
    }

    /// Event log, newest entry first
    pub fn log(&self) -> &VecDeque<String> {
        &self.log
    }

    pub fn last_step(&self) -> Option<&StepTrace> {
        self.last_step.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Lock or unlock the map for cell edits.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.settings.learning_rate = learning_rate;
    }

    pub fn set_discount_factor(&mut self, discount_factor: f64) {
        self.settings.discount_factor = discount_factor;
    }

    fn snapshot_entry(&self) -> HistoryEntry {
        HistoryEntry {
            agent: self.agent,
            reference: self.reference.clone(),
            user: self.user.clone(),
            log: self.log.clone(),
            last_step: self.last_step,
        }
    }

    /// Move the agent with `action` and update the reference table.
    ///
    /// The pre-step state is pushed to history first. Reaching a goal logs the
    /// completion and sends the agent back to the start position.
    ///
    /// # Errors
    ///
    /// Returns the first observer error. The step is already committed at that
    /// point: the table, agent, log and history reflect it and [`undo`](Self::undo)
    /// reverts it as usual.
    pub fn perform_action(&mut self, action: Action) -> Result<StepOutcome> {
        let entry = self.snapshot_entry();
        self.history.push(entry);

        let current = self.agent;
        let outcome = apply_step(
            &self.grid,
            &self.settings,
            &mut self.reference,
            current,
            action,
        );

        self.last_step = Some(outcome.trace);
        self.log.push_front(outcome.trace.log_line());
        self.agent = if outcome.terminal {
            self.log.push_front(GOAL_LOG_LINE.to_string());
            self.start
        } else {
            outcome.next_pos
        };

        let trace = outcome.trace;
        self.notify(|o| o.on_step(&trace))?;
        if outcome.terminal {
            let start = self.start;
            self.notify(|o| o.on_goal_reached(start))?;
        }
        Ok(outcome)
    }

    /// Take a uniformly random action through the same path as [`perform_action`](Self::perform_action).
    pub fn random_step(&mut self) -> Result<StepOutcome> {
        let action = Action::ALL[self.rng.random_range(0..Action::ALL.len())];
        self.perform_action(action)
    }

    /// Restore the state saved before the most recent step.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(entry) = self.history.pop() else {
            return Ok(false);
        };
        self.agent = entry.agent;
        self.reference = entry.reference;
        self.user = entry.user;
        self.log = entry.log;
        self.last_step = entry.last_step;

        let agent = self.agent;
        self.notify(|o| o.on_undo(agent))?;
        Ok(true)
    }

    fn reset_state(&mut self, reason: ResetReason) -> Result<()> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        self.reference = QTable::new(rows, cols);
        self.user = UserQTable::new(rows, cols);
        self.log.clear();
        self.history.clear();
        self.last_step = None;
        self.agent = self.start;

        info!(%reason, rows, cols, "session reset");
        self.notify(|o| o.on_reset(reason))
    }

    /// Zero both tables, clear log and history, and return the agent to the start.
    pub fn reset_tables(&mut self) -> Result<()> {
        self.reset_state(ResetReason::Manual)
    }

    /// Change grid dimensions (clamped to the allowed range), keeping
    /// overlapping cells. Start and agent move to (0,0); everything else resets.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let (rows, cols) = (clamp_side(rows), clamp_side(cols));
        self.grid = self.grid.resized(rows, cols);
        self.start = Position::ORIGIN;
        self.reset_state(ResetReason::Resize)
    }

    /// Rotate the cell at `pos` through Empty → Wall → Trap → Goal → Start.
    ///
    /// Ignored while the map is locked (returns `Ok(false)`). Otherwise the
    /// session resets and `Ok(true)` is returned.
    pub fn rotate_cell(&mut self, pos: Position) -> Result<bool> {
        if !self.editing {
            return Ok(false);
        }
        let kind = self.grid.rotate_cell(pos, &self.rewards)?;
        if kind == CellType::Start {
            self.start = pos;
        }
        self.reset_state(ResetReason::CellEdit)?;
        Ok(true)
    }

    /// Place a cell of `kind` with an explicit `reward` and reset the session.
    pub fn set_cell_type(&mut self, pos: Position, kind: CellType, reward: f64) -> Result<()> {
        if !self.editing {
            return Err(Error::MapLocked);
        }
        self.grid.set_cell(pos, kind, reward)?;
        if kind == CellType::Start {
            self.start = pos;
        }
        self.reset_state(ResetReason::CellEdit)
    }

    /// Place a cell of `kind` with the reward the current configuration assigns it.
    pub fn place_cell(&mut self, pos: Position, kind: CellType) -> Result<()> {
        let reward = self.rewards.reward_for(kind);
        self.set_cell_type(pos, kind, reward)
    }

    /// Change the goal or trap reward and re-sync every matching cell.
    /// Tables, log and history are kept. Returns the number of cells rewritten.
    pub fn apply_reward_config(&mut self, kind: RewardKind, value: f64) -> usize {
        self.rewards.set(kind, value);
        let updated = self.grid.apply_reward(kind, value);
        debug!(%kind, value, updated, "reward configuration changed");
        updated
    }

    /// Store a learner's raw entry for `(pos, action)`.
    pub fn set_user_value(
        &mut self,
        pos: Position,
        action: Action,
        raw: impl Into<String>,
    ) -> Result<()> {
        self.user.set(pos, action, raw)
    }

    /// Check the learner's table against the reference table.
    pub fn validate(&self) -> ValidationReport {
        self.user.validate(&self.reference)
    }

    /// Readable state for the presentation layer
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid.clone(),
            agent: self.agent,
            start: self.start,
            settings: self.settings,
            rewards: self.rewards,
            reference_table: self.reference.clone(),
            user_table: self.user.clone(),
            log: self.log.iter().cloned().collect(),
            last_step: self.last_step,
            can_undo: self.can_undo(),
            editing: self.editing,
        }
    }
}

impl Default for LabSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for LabSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabSession")
            .field("grid", &self.grid)
            .field("settings", &self.settings)
            .field("rewards", &self.rewards)
            .field("agent", &self.agent)
            .field("start", &self.start)
            .field("history_len", &self.history.len())
            .field("editing", &self.editing)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
