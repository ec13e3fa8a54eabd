//! Tests for the console turn loop.

use noughts::{
    Board, GameState, GameStatus, HeuristicPlayer, HumanPlayer, Move, Orchestrator, Player, Side,
};
use std::io::Cursor;

fn human(script: &str) -> Box<dyn Player> {
    Box::new(HumanPlayer::new(
        "human",
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    ))
}

fn computer() -> Box<dyn Player> {
    Box::new(HeuristicPlayer::new("computer"))
}

fn run(cross: Box<dyn Player>, nought: Box<dyn Player>) -> (GameState, String) {
    let mut orchestrator = Orchestrator::new(cross, nought, Vec::new());
    let state = orchestrator.run().expect("game completes");
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    (state, output)
}

#[test]
fn test_computer_opens_and_wins() {
    // Computer X takes the center and then (0, 2); O never covers (2, 0).
    let (state, output) = run(computer(), human("0 0\n2 2\n"));

    assert_eq!(state.status(), GameStatus::Won(Side::Cross));
    assert_eq!(
        state.history(),
        &[
            Move::new(1, 1),
            Move::new(0, 0),
            Move::new(0, 2),
            Move::new(2, 2),
            Move::new(2, 0),
        ]
    );
    assert!(output.starts_with("  _  _  _\n  _  _  _\n  _  _  _\n\nX turn: 1 1\n"));
    assert!(output.contains("\nO turn: "));
    assert!(output.ends_with("  O  _  X\n  _  X  _\n  X  _  O\n\nX win!\n"));
}

#[test]
fn test_human_exploits_missing_lookahead() {
    // O answers the far corner with a corner of its own and X forks.
    let (state, output) = run(human("0 0\n2 2\n2 0\n2 1\n"), computer());

    assert_eq!(state.status(), GameStatus::Won(Side::Cross));
    assert_eq!(state.history().len(), 7);
    assert!(output.contains("\nO turn: 1 1\n"));
    assert!(output.contains("\nO turn: 0 2\n"));
    assert!(output.ends_with("  X  _  O\n  O  O  _\n  X  X  X\n\nX win!\n"));
}

#[test]
fn test_self_play_draws() {
    let (state, output) = run(computer(), computer());

    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.step_count(), 9);
    assert!(state.board().is_full());
    assert!(output.ends_with("  O  O  X\n  X  X  O\n  O  X  X\ngame end, no one win.\n"));
}

#[test]
fn test_bad_input_is_retried() {
    let (state, _) = run(computer(), human("1 1\nfoo\n9 9\n0 0\n2 2\n"));
    assert_eq!(state.history()[1], Move::new(0, 0));
    assert_eq!(state.status(), GameStatus::Won(Side::Cross));
}

#[test]
fn test_input_ending_early_is_an_error() {
    let mut orchestrator = Orchestrator::new(computer(), human("0 0\n"), Vec::new());
    assert!(orchestrator.run().is_err());
}

#[test]
fn test_echo_can_be_disabled() {
    let mut orchestrator =
        Orchestrator::new(computer(), human("0 0\n2 2\n"), Vec::new()).echo_ai_moves(false);
    orchestrator.run().unwrap();
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(output.contains("\nX turn:   _  _  _\n  _  X  _\n"));
    assert!(!output.contains("X turn: 1 1"));
}

#[test]
fn test_finished_position_only_reports() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    let mut orchestrator = Orchestrator::new(computer(), computer(), Vec::new());
    let state = orchestrator
        .run_from(GameState::from_board(board, Side::Cross))
        .unwrap();
    assert_eq!(state.status(), GameStatus::Draw);
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    assert_eq!(output, "  X  O  X\n  O  X  X\n  O  X  O\ngame end, no one win.\n");
}
