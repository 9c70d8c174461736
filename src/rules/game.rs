//! The match context.
//!
//! `Game` owns everything that changes during a match: board occupancy,
//! each side's token counters, the active phase, whose turn it is and the
//! pending selection. Every mutation goes through `&mut Game`, and each
//! action either applies completely or is rejected without touching
//! anything.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::error::RuleError;
use super::phase::{evaluate_outcome, phase_for, Outcome, SideState, MIN_TOKENS};
use crate::board::{
    mills_through, Action, ActionKind, BoardState, PerSide, Phase, Position, Side, ALL_SIDES,
    POSITION_COUNT,
};
use crate::movegen::{self, has_legal_action};
use crate::scenario::{Scenario, ScenarioError};

/// Standard pool size for a full game.
pub const DEFAULT_TOKENS_PER_SIDE: u8 = 9;

/// Largest pool that still leaves the board able to hold both sides.
pub const MAX_TOKENS_PER_SIDE: u8 = (POSITION_COUNT / 2) as u8;

/// Match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub tokens_per_side: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tokens_per_side: DEFAULT_TOKENS_PER_SIDE,
        }
    }
}

impl GameConfig {
    /// Returns the pool size clamped to a playable range.
    pub fn pool(&self) -> u8 {
        self.tokens_per_side.clamp(MIN_TOKENS, MAX_TOKENS_PER_SIDE)
    }
}

/// What an applied action did, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    /// The side that performed the action.
    pub mover: Side,
    /// Mills completed by the action (0, 1 or 2).
    pub mills_closed: usize,
    /// Phase after the action.
    pub phase: Phase,
    /// Side to act after the action.
    pub turn: Side,
    pub outcome: Option<Outcome>,
}

/// A serializable view of the match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub occupancy: Vec<Option<Side>>,
    pub phase: Phase,
    pub turn: Side,
    pub sides: PerSide<SideState>,
    pub selection: Option<Position>,
    pub legal: Vec<Position>,
    pub outcome: Option<Outcome>,
}

/// A single match of Nine Men's Morris.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    board: BoardState,
    sides: PerSide<SideState>,
    phase: Phase,
    turn: Side,
    selection: Option<Position>,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

impl Game {
    /// Creates a match on an empty board, White to place first.
    pub fn new(config: GameConfig) -> Self {
        let pool = config.pool();
        Game {
            config,
            board: BoardState::empty(),
            sides: PerSide::splat(SideState::fresh(pool)),
            phase: Phase::Set,
            turn: Side::White,
            selection: None,
            outcome: None,
        }
    }

    /// Builds a match from a scenario description.
    ///
    /// The outcome is evaluated immediately, so a layout in which a side has
    /// already lost starts in `GameOver`.
    pub fn from_scenario(scenario: &Scenario, config: GameConfig) -> Result<Self, ScenarioError> {
        let mut board = BoardState::empty();
        let mut sides = PerSide::splat(SideState::fresh(0));

        for side in ALL_SIDES {
            for &p in &scenario.occupancy[side] {
                if !board.place(p, side) {
                    return Err(ScenarioError::DoubleOccupied(p));
                }
            }
            let declared = scenario.tokens_on_board[side];
            let actual = board.count(side);
            if actual != declared as usize {
                return Err(ScenarioError::CountMismatch {
                    side,
                    declared,
                    actual,
                });
            }
            let to_place = scenario.tokens_to_place[side];
            let initial_pool = to_place
                .checked_add(declared)
                .ok_or(ScenarioError::PoolOverflow { side })?;
            sides[side] = SideState {
                initial_pool,
                to_place,
                on_board: declared,
                captured: 0,
            };
        }

        let to_move = scenario.to_move;
        let expected = phase_for(&sides[to_move]);
        match scenario.starting_phase {
            declared @ (Phase::Set | Phase::Move | Phase::Jump) if declared != expected => {
                return Err(ScenarioError::PhaseMismatch { declared, expected });
            }
            Phase::Remove if board.count(to_move.opponent()) == 0 => {
                return Err(ScenarioError::NothingToRemove);
            }
            _ => {}
        }

        let judged_phase = match scenario.starting_phase {
            Phase::GameOver => expected,
            other => other,
        };
        let outcome = evaluate_outcome(
            to_move,
            judged_phase,
            &sides[to_move],
            &sides[to_move.opponent()],
            &board,
        );
        if scenario.starting_phase == Phase::GameOver && outcome.is_none() {
            return Err(ScenarioError::NotOver);
        }

        let game = Game {
            config,
            board,
            sides,
            phase: if outcome.is_some() {
                Phase::GameOver
            } else {
                scenario.starting_phase
            },
            turn: to_move,
            selection: None,
            outcome,
        };
        debug!(phase = %game.phase, turn = %game.turn, "scenario loaded");
        Ok(game)
    }

    /// Clears the board and refills both pools for a fresh match.
    pub fn reset(&mut self) {
        *self = Game::new(self.config);
        debug!(pool = self.config.pool(), "board reset");
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side whose action is expected next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Token counters for `side`.
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    /// Returns true if `position` is part of a completed `side` mill.
    pub fn is_mill(&self, position: Position, side: Side) -> bool {
        crate::board::is_mill(&self.board, position, side)
    }

    /// Positions the side to act may choose right now.
    ///
    /// During `Move` and `Jump` this returns sources until a token of the
    /// side to act is selected, and destinations afterwards.
    pub fn legal_positions(&self) -> Vec<Position> {
        movegen::legal_positions(self.phase, self.turn, self.selection, &self.board)
    }

    /// Every complete action the side to act may commit.
    pub fn legal_actions(&self) -> Vec<Action> {
        movegen::legal_actions(self.phase, self.turn, &self.board)
    }

    /// Picks up a token, or drops the current selection with `None`.
    ///
    /// A selection must name an occupied position and is only meaningful
    /// during `Move` and `Jump`. Selecting an opponent token is accepted;
    /// the generators then keep offering sources.
    pub fn select(&mut self, selection: Option<Position>) -> Result<(), RuleError> {
        let Some(p) = selection else {
            self.selection = None;
            return Ok(());
        };
        if !ActionKind::Select.allowed_in(self.phase) {
            return Err(RuleError::IllegalPhaseAction {
                action: ActionKind::Select,
                phase: self.phase,
            });
        }
        if self.board.is_empty(p) {
            return Err(RuleError::InvalidSelection(p));
        }
        self.selection = Some(p);
        Ok(())
    }

    /// Places a token from the pool of the side to act.
    pub fn place(&mut self, position: Position) -> Result<Transition, RuleError> {
        self.apply(Action::Place(position))
    }

    /// Steps or jumps a token of the side to act.
    pub fn move_token(&mut self, from: Position, to: Position) -> Result<Transition, RuleError> {
        self.apply(Action::Move { from, to })
    }

    /// Captures an opponent token after a mill.
    pub fn remove(&mut self, position: Position) -> Result<Transition, RuleError> {
        self.apply(Action::Remove(position))
    }

    /// Validates and applies one committed action.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn, phase = %self.phase))]
    pub fn apply(&mut self, action: Action) -> Result<Transition, RuleError> {
        self.check_consistency()?;
        if !action.kind().allowed_in(self.phase) {
            return Err(RuleError::IllegalPhaseAction {
                action: action.kind(),
                phase: self.phase,
            });
        }
        self.validate(action)?;

        let mover = self.turn;
        let mills_closed = self.commit(action);

        if mills_closed > 0 && has_legal_action(Phase::Remove, mover, &self.board) {
            self.phase = Phase::Remove;
            self.selection = None;
            debug!(%mover, mills_closed, "mill closed");
        } else {
            self.end_turn();
        }

        Ok(Transition {
            action,
            mover,
            mills_closed,
            phase: self.phase,
            turn: self.turn,
            outcome: self.outcome,
        })
    }

    /// Rejects `action` unless it is in the generator's current result set.
    fn validate(&self, action: Action) -> Result<(), RuleError> {
        let offered = |selection: Option<Position>, target: Position| {
            movegen::legal_positions(self.phase, self.turn, selection, &self.board)
                .contains(&target)
        };
        match action {
            Action::Place(p) | Action::Remove(p) => {
                if !offered(None, p) {
                    return Err(RuleError::InvalidSelection(p));
                }
            }
            Action::Move { from, to } => {
                if self.board.owner(from) != Some(self.turn) || !offered(None, from) {
                    return Err(RuleError::InvalidSelection(from));
                }
                if !offered(Some(from), to) {
                    return Err(RuleError::InvalidSelection(to));
                }
            }
        }
        Ok(())
    }

    /// Mutates board and counters for a validated action. Returns the number
    /// of mills the action completed.
    fn commit(&mut self, action: Action) -> usize {
        let side = self.turn;
        match action {
            Action::Place(p) => {
                let placed = self.board.place(p, side);
                debug_assert!(placed, "placement on occupied {}", p);
                let s = &mut self.sides[side];
                s.to_place -= 1;
                s.on_board += 1;
                mills_through(&self.board, p, side)
            }
            Action::Move { from, to } => {
                let moved = self.board.relocate(from, to);
                debug_assert!(moved, "relocation {} -> {} not possible", from, to);
                mills_through(&self.board, to, side)
            }
            Action::Remove(p) => {
                let taken = self.board.clear(p);
                debug_assert_eq!(taken, Some(side.opponent()));
                let victim = &mut self.sides[side.opponent()];
                victim.on_board -= 1;
                victim.captured += 1;
                0
            }
        }
    }

    /// Passes the turn and re-derives the phase and outcome.
    fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.selection = None;
        self.phase = phase_for(&self.sides[self.turn]);
        self.outcome = evaluate_outcome(
            self.turn,
            self.phase,
            &self.sides[self.turn],
            &self.sides[self.turn.opponent()],
            &self.board,
        );
        match self.outcome {
            Some(outcome) => {
                self.phase = Phase::GameOver;
                info!(winner = %outcome.winner, reason = outcome.reason.name(), "game over");
            }
            None => debug!(turn = %self.turn, phase = %self.phase, "turn passed"),
        }
    }

    /// Verifies that the counters agree with the board.
    pub fn check_consistency(&self) -> Result<(), RuleError> {
        for side in ALL_SIDES {
            let s = &self.sides[side];
            let on_board = self.board.count(side);
            if on_board != s.on_board as usize {
                return Err(RuleError::InconsistentState(format!(
                    "{} has {} tokens on the board but the counter says {}",
                    side, on_board, s.on_board
                )));
            }
            if s.to_place as u16 + s.on_board as u16 + s.captured as u16 != s.initial_pool as u16 {
                return Err(RuleError::InconsistentState(format!(
                    "{} pool {} + board {} + captured {} != {}",
                    side, s.to_place, s.on_board, s.captured, s.initial_pool
                )));
            }
        }
        Ok(())
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            occupancy: self.board.cells().to_vec(),
            phase: self.phase,
            turn: self.turn,
            sides: self.sides,
            selection: self.selection,
            legal: self.legal_positions(),
            outcome: self.outcome,
        }
    }

    /// Overwrites a counter without touching the board. Test-only hook for
    /// exercising the consistency check.
    #[cfg(test)]
    pub(crate) fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side]
    }
}
