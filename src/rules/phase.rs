//! Phase sequencing and win conditions.
//!
//! `phase_for` is the single authority that decides whether a side's turn
//! is a placement, a step, or a jump. `Remove` is entered only by closing a
//! mill and `GameOver` only through `evaluate_outcome`.

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Phase, Side};
use crate::movegen::has_legal_action;

/// A side reduced to this many tokens may jump anywhere.
pub const JUMP_THRESHOLD: u8 = 3;

/// A side with fewer tokens left than this loses.
pub const MIN_TOKENS: u8 = 3;

/// Token bookkeeping for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideState {
    /// Pool size the match started with.
    pub initial_pool: u8,
    /// Tokens still waiting to be placed.
    pub to_place: u8,
    /// Tokens currently on the board.
    pub on_board: u8,
    /// Tokens taken by the opponent.
    pub captured: u8,
}

impl SideState {
    /// A side that has placed nothing yet.
    pub const fn fresh(pool: u8) -> Self {
        SideState {
            initial_pool: pool,
            to_place: pool,
            on_board: 0,
            captured: 0,
        }
    }

    /// Tokens the side can still field: on the board plus in the pool.
    pub const fn remaining(&self) -> u8 {
        self.on_board + self.to_place
    }
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The loser was reduced to two tokens.
    TokenCount,
    /// The loser had no legal action on their turn.
    NoLegalMoves,
}

impl WinReason {
    pub const fn name(self) -> &'static str {
        match self {
            WinReason::TokenCount => "token_count",
            WinReason::NoLegalMoves => "no_legal_moves",
        }
    }
}

/// The result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Returns the phase a side's turn is played in, from its counters alone.
///
/// - `Set` while the side still has tokens to place,
/// - `Jump` when exactly three tokens are left on the board,
/// - `Move` otherwise.
pub fn phase_for(side: &SideState) -> Phase {
    if side.to_place > 0 {
        Phase::Set
    } else if side.on_board == JUMP_THRESHOLD {
        Phase::Jump
    } else {
        Phase::Move
    }
}

/// Decides whether the match is over with `to_act` about to play `phase`.
///
/// The side to act is checked first: too few tokens, then no legal action.
/// The waiting side can only lose on token count.
pub fn evaluate_outcome(
    to_act: Side,
    phase: Phase,
    acting: &SideState,
    waiting: &SideState,
    state: &BoardState,
) -> Option<Outcome> {
    if acting.remaining() < MIN_TOKENS {
        return Some(Outcome {
            winner: to_act.opponent(),
            reason: WinReason::TokenCount,
        });
    }
    if waiting.remaining() < MIN_TOKENS {
        return Some(Outcome {
            winner: to_act,
            reason: WinReason::TokenCount,
        });
    }
    if !has_legal_action(phase, to_act, state) {
        return Some(Outcome {
            winner: to_act.opponent(),
            reason: WinReason::NoLegalMoves,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn counters(to_place: u8, on_board: u8) -> SideState {
        SideState {
            initial_pool: 9,
            to_place,
            on_board,
            captured: 9 - to_place - on_board,
        }
    }

    #[test]
    fn pool_means_set() {
        assert_eq!(phase_for(&counters(1, 3)), Phase::Set);
        assert_eq!(phase_for(&SideState::fresh(9)), Phase::Set);
    }

    #[test]
    fn jump_iff_exactly_three_on_board() {
        for on_board in 0..=9 {
            let expected = if on_board == 3 { Phase::Jump } else { Phase::Move };
            assert_eq!(phase_for(&counters(0, on_board)), expected, "{}", on_board);
        }
    }

    #[test]
    fn two_tokens_lose_on_count() {
        let state = BoardState::empty();
        let outcome = evaluate_outcome(Side::Black, Phase::Move, &counters(0, 2), &counters(0, 5), &state);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Side::White,
                reason: WinReason::TokenCount
            })
        );
    }

    #[test]
    fn pool_tokens_count_towards_survival() {
        let mut state = BoardState::empty();
        state.place(Position::new(0).unwrap(), Side::Black);
        state.place(Position::new(1).unwrap(), Side::White);
        let outcome = evaluate_outcome(Side::Black, Phase::Set, &counters(6, 1), &counters(7, 1), &state);
        assert_eq!(outcome, None);
    }

    #[test]
    fn blocked_side_loses() {
        let mut state = BoardState::empty();
        for i in [1, 5, 9, 13, 23] {
            state.place(Position::new(i).unwrap(), Side::White);
        }
        for i in [0, 6, 7, 8, 14, 15] {
            state.place(Position::new(i).unwrap(), Side::Black);
        }
        let outcome = evaluate_outcome(Side::Black, Phase::Move, &counters(0, 6), &counters(0, 5), &state);
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Side::White,
                reason: WinReason::NoLegalMoves
            })
        );
    }
}
