//! Rule-level tests against the public library API.
//!
//! Walks the guided layouts step by step, then plays seeded random matches
//! and checks the board and counter invariants after every action.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use morris::board::{
    is_mill, Action, Phase, Position, Side, ALL_POSITIONS, ALL_SIDES, POSITION_COUNT,
};
use morris::rules::{phase_for, Game, GameConfig, Outcome, RuleError, WinReason, JUMP_THRESHOLD};
use morris::scenario::Scenario;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn pos(i: u8) -> Position {
    Position::new(i).unwrap()
}

fn positions(indices: &[u8]) -> Vec<Position> {
    indices.iter().map(|&i| pos(i)).collect()
}

fn preset(name: &str) -> Game {
    Game::from_scenario(&Scenario::preset(name).unwrap(), GameConfig::default()).unwrap()
}

/// Checks every invariant that must hold between actions.
fn assert_invariants(game: &Game) {
    let board = game.board();
    let white = board.count(Side::White);
    let black = board.count(Side::Black);
    assert_eq!(white + black + board.empty_count(), POSITION_COUNT);

    for side in ALL_SIDES {
        let s = game.side(side);
        assert_eq!(board.count(side), s.on_board as usize, "{} on board", side);
        assert_eq!(
            s.to_place + s.on_board + s.captured,
            s.initial_pool,
            "{} pool",
            side
        );
    }
    assert!(game.check_consistency().is_ok());

    let acting = game.side(game.turn());
    match game.phase() {
        Phase::Set | Phase::Move | Phase::Jump => {
            assert_eq!(game.phase(), phase_for(acting));
            assert!(game.outcome().is_none());
            assert!(!game.legal_actions().is_empty());
        }
        Phase::Remove => {
            assert!(game.outcome().is_none());
            let victim = game.turn().opponent();
            let offered = game.legal_positions();
            assert!(!offered.is_empty());
            let any_unprotected = board
                .positions_of(victim)
                .any(|p| !is_mill(board, p, victim));
            for p in offered {
                assert_eq!(board.owner(p), Some(victim));
                if any_unprotected {
                    assert!(!is_mill(board, p, victim), "protected {} offered", p);
                }
            }
        }
        Phase::GameOver => {
            assert!(game.outcome().is_some());
            assert!(game.legal_positions().is_empty());
            assert!(game.legal_actions().is_empty());
        }
    }

    if game.phase() == Phase::Jump {
        assert_eq!(acting.on_board, JUMP_THRESHOLD);
        assert_eq!(acting.to_place, 0);
    }
}

/// Draws an action that is not currently legal, if one can be found.
fn random_illegal_action(game: &Game, rng: &mut SmallRng) -> Option<Action> {
    let legal = game.legal_actions();
    for _ in 0..32 {
        let a = *ALL_POSITIONS.choose(rng)?;
        let b = *ALL_POSITIONS.choose(rng)?;
        let action = match rng.gen_range(0..3) {
            0 => Action::Place(a),
            1 => Action::Move { from: a, to: b },
            _ => Action::Remove(a),
        };
        if !legal.contains(&action) {
            return Some(action);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Guided layouts
// ---------------------------------------------------------------------------

#[test]
fn opening_placements_stay_in_set() {
    let mut game = Game::default();
    for i in [0, 23, 1, 8, 7] {
        let t = game.place(pos(i)).unwrap();
        assert_eq!(t.mills_closed, 0);
        assert_invariants(&game);
    }
    assert_eq!(game.phase(), Phase::Set);
    assert_eq!(game.turn(), Side::Black);
    assert_eq!(game.side(Side::White).to_place, 6);
    assert_eq!(game.side(Side::Black).to_place, 7);
    assert_eq!(game.legal_positions().len(), POSITION_COUNT - 5);
}

#[test]
fn move_layout_offers_step_sources() {
    let mut game = preset("move");
    assert_invariants(&game);
    let sources = game.legal_positions();
    assert!(sources.contains(&pos(10)));
    assert_eq!(sources, positions(&[1, 7, 10]));

    game.select(Some(pos(10))).unwrap();
    for to in game.legal_positions() {
        assert!(pos(10).is_adjacent(to));
        assert!(game.board().is_empty(to));
    }
}

#[test]
fn jump_layout_frees_every_token() {
    let mut game = preset("jump");
    assert_eq!(game.phase(), Phase::Jump);
    assert_eq!(game.legal_positions(), positions(&[0, 1, 2]));

    game.select(Some(pos(0))).unwrap();
    let destinations = game.legal_positions();
    assert_eq!(destinations.len(), 17);
    assert_eq!(destinations, game.board().empty_positions().collect::<Vec<_>>());
}

#[test]
fn reducing_to_two_tokens_loses() {
    let scenario = Scenario::layout(&[0, 1, 2], &[4, 16, 23], Phase::Remove, Side::White);
    let mut game = Game::from_scenario(&scenario, GameConfig::default()).unwrap();
    let t = game.remove(pos(16)).unwrap();
    assert_eq!(t.phase, Phase::GameOver);
    assert_eq!(
        game.outcome(),
        Some(Outcome {
            winner: Side::White,
            reason: WinReason::TokenCount
        })
    );
    assert_invariants(&game);
}

#[test]
fn mill_during_move_triggers_removal() {
    // 10 is not adjacent to 2, so the mill has to come from 3.
    let scenario = Scenario::layout(&[0, 1, 10, 20], &[8, 13, 22, 23], Phase::Move, Side::White);
    let mut game = Game::from_scenario(&scenario, GameConfig::default()).unwrap();
    let t = game.move_token(pos(10), pos(2));
    assert!(matches!(t, Err(RuleError::InvalidSelection(_))));

    let scenario = Scenario::layout(&[0, 1, 3, 20], &[8, 13, 22, 23], Phase::Move, Side::White);
    let mut game = Game::from_scenario(&scenario, GameConfig::default()).unwrap();
    let t = game.move_token(pos(3), pos(2)).unwrap();
    assert_eq!(t.mills_closed, 1);
    assert_eq!(t.phase, Phase::Remove);
    assert_eq!(t.turn, Side::White);
    // No black mill stands, so every black token is open.
    assert_eq!(game.legal_positions(), positions(&[8, 13, 22, 23]));
    assert_invariants(&game);
}

#[test]
fn blocked_layout_is_lost_on_load() {
    let game = preset("blocked");
    assert_eq!(
        game.outcome(),
        Some(Outcome {
            winner: Side::White,
            reason: WinReason::NoLegalMoves
        })
    );
    assert_invariants(&game);
}

#[test]
fn every_preset_satisfies_invariants() {
    for name in morris::scenario::PRESET_NAMES {
        assert_invariants(&preset(name));
    }
}

// ---------------------------------------------------------------------------
// Random playouts
// ---------------------------------------------------------------------------

const PLAYOUT_LIMIT: usize = 400;

fn playout(seed: u64, tokens_per_side: u8) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(GameConfig { tokens_per_side });
    assert_invariants(&game);

    for _ in 0..PLAYOUT_LIMIT {
        if game.phase() == Phase::GameOver {
            break;
        }

        if let Some(bad) = random_illegal_action(&game, &mut rng) {
            let before = game.clone();
            assert!(game.apply(bad).is_err(), "{} accepted", bad);
            assert_eq!(game, before);
        }

        let actions = game.legal_actions();
        let action = *actions.choose(&mut rng).unwrap();
        if let Action::Move { from, to } = action {
            game.select(Some(from)).unwrap();
            assert!(game.legal_positions().contains(&to));
        }
        let mover = game.turn();
        let t = game.apply(action).unwrap();
        assert_eq!(t.mover, mover);
        assert_eq!(t.phase, game.phase());
        assert_eq!(game.selection(), None);
        if t.phase == Phase::Remove {
            assert!(t.mills_closed > 0);
            assert_eq!(t.turn, mover);
        }
        assert_invariants(&game);
    }
    game
}

#[test]
fn random_playouts_hold_invariants() {
    for seed in 0..40 {
        playout(seed, 9);
    }
}

#[test]
fn random_playouts_with_other_pool_sizes() {
    for (seed, pool) in [(1, 3), (2, 4), (3, 6), (4, 12), (5, 12), (6, 3)] {
        playout(seed, pool);
    }
}

#[test]
fn finished_playouts_report_a_winner() {
    let mut finished = 0;
    for seed in 100..140 {
        let game = playout(seed, 9);
        if let Some(outcome) = game.outcome() {
            finished += 1;
            let loser = game.side(outcome.winner.opponent());
            match outcome.reason {
                WinReason::TokenCount => assert!(loser.to_place + loser.on_board < 3),
                WinReason::NoLegalMoves => assert_eq!(game.turn(), outcome.winner.opponent()),
            }
        }
    }
    assert!(finished > 0);
}
