//! Tests for piped play over raw byte input.

use gridtac::{App, Game, GameStatus, KeyBindings, Player, run_plain};

fn new_app(dimension: usize, keys: KeyBindings) -> App {
    App::new(Game::new(dimension).unwrap(), keys)
}

fn play(app: &mut App, input: &[u8]) -> String {
    let mut output = Vec::new();
    run_plain(app, input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// X 0, O 3, X 1, O 4, X 2: top row for X
const TOP_ROW_WIN: &[u8] = b"\r\x1b[B\r\x1b[A\x1b[C\r\x1b[B\r\x1b[A\x1b[C\r";

#[test]
fn test_piped_game_reaches_win() {
    let mut app = new_app(3, KeyBindings::default());
    let output = play(&mut app, TOP_ROW_WIN);

    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    assert_eq!(app.game().history(), &[0, 3, 1, 4, 2]);
    assert!(output.contains(" X | X | X "));
    assert!(output.contains("Cursor: row 1, column 3"));
    assert!(output.ends_with("Player X wins! Press 'n' for a new game or 'c' to quit.\n\n"));
}

#[test]
fn test_quit_key_stops_input() {
    let mut app = new_app(3, KeyBindings::default());
    play(&mut app, b"\rc\x1b[C\r");

    assert_eq!(app.game().history(), &[0]);
    assert_eq!(app.game().cursor(), 0);
}

#[test]
fn test_new_game_key_clears_board() {
    let mut app = new_app(3, KeyBindings::default());
    let output = play(&mut app, b"\r\x1b[C\rn");

    assert!(app.game().history().is_empty());
    assert_eq!(app.game().to_move(), Player::X);
    assert!(output.ends_with("Player X's turn (turn 1)\n\n"));
}

#[test]
fn test_rebound_keys_and_noise() {
    let mut app = new_app(2, KeyBindings::new('q', 'r'));
    // 'c' is no longer bound and the stray bytes are skipped.
    play(&mut app, b"xc\x1b[C\r\x1b[Zq\r");

    assert_eq!(app.game().history(), &[1]);
}

#[test]
fn test_empty_input_prints_start() {
    let mut app = new_app(3, KeyBindings::default());
    let output = play(&mut app, b"");

    assert!(output.starts_with("   |   |   \n---+---+---\n"));
    assert!(output.contains("Cursor: row 1, column 1"));
    assert!(output.ends_with("Player X's turn (turn 1)\n\n"));
}
