//! Full-game scenario tests for the rules engine.
//!
//! These drive `GameSession` through complete games exactly as a
//! presentation layer would: place two tokens per turn, measure
//! collapsed pairs, and react to the reported outcomes.

use quantum_connect::{
    CellPos, CellState, GameResult, GameSession, Phase, PlacementId, Player, RulesError,
};

fn pos(row: usize, col: usize) -> CellPos {
    CellPos::new(row, col).unwrap()
}

/// Play a full turn: both tokens of the active player.
fn play_turn(session: &mut GameSession, first_col: usize, second_col: usize) {
    let first = session.place_token(first_col).unwrap();
    assert!(first.awaiting_second_token);
    let second = session.place_token(second_col).unwrap();
    assert!(second.turn_complete);
}

// =============================================================================
// Placement scenarios
// =============================================================================

/// Empty board, one token at column 3: lands at (5, 3), stays hidden,
/// and the engine waits for the entangled partner.
#[test]
fn test_partial_turn_leaves_hidden_token() {
    let mut session = GameSession::new();
    let outcome = session.place_token(3).unwrap();

    assert_eq!(outcome.position, pos(5, 3));
    assert_eq!(session.phase(), Phase::AwaitingSecondToken);
    assert!(matches!(
        session.cell_state(pos(5, 3)),
        CellState::Placed { .. }
    ));
    // Row 5 and column 3 are nowhere near full.
    assert!(!session.cell_state(pos(5, 3)).is_measurable());
    assert!(!session.can_measure());
}

/// Filling column 0 promotes all six of its hidden tokens to measurable
/// and permanently rejects further placements there.
#[test]
fn test_column_fill_promotes_and_disables() {
    let mut session = GameSession::new();
    for _ in 0..2 {
        play_turn(&mut session, 0, 0);
    }
    // Five tokens down, one to go: nothing measurable yet.
    session.place_token(0).unwrap();
    assert!(!session.can_measure());

    let outcome = session.place_token(0).unwrap();
    assert_eq!(outcome.position, pos(0, 0));
    for row in 0..6 {
        assert!(session.cell_state(pos(row, 0)).is_measurable());
    }
    assert!(session.is_column_full(0));
    assert_eq!(session.lowest_open_cell(0), None);
    assert_eq!(session.place_token(0), Err(RulesError::InvalidColumn(0)));
    // Still rejected after unrelated play elsewhere.
    play_turn(&mut session, 1, 2);
    assert_eq!(session.place_token(0), Err(RulesError::InvalidColumn(0)));
}

/// Open-cell count drops by exactly one per placement, and is even
/// exactly at turn boundaries.
#[test]
fn test_open_count_parity_tracks_turns() {
    let mut session = GameSession::new();
    let mut expected = 42;

    for col in [3, 4, 2, 5, 3, 3] {
        session.place_token(col).unwrap();
        expected -= 1;
        assert_eq!(session.board().open_cells(), expected);

        let at_boundary = session.phase() != Phase::AwaitingSecondToken;
        assert_eq!(session.board().open_cells() % 2 == 0, at_boundary);
    }
}

// =============================================================================
// Win and tie scenarios
// =============================================================================

/// Red collects four in a row along the bottom. The final measurement
/// reports a single winner and marks exactly the four run cells.
#[test]
fn test_single_winner_horizontal() {
    let mut session = GameSession::new();

    // Blue, Red, Blue, Red. Row 5 fills on the last drop, so every
    // bottom-row token becomes measurable.
    play_turn(&mut session, 0, 6); // pair (5,0) / (5,6)
    play_turn(&mut session, 1, 5); // pair (5,1) / (5,5)
    play_turn(&mut session, 2, 6); // pair (5,2) / (4,6)
    play_turn(&mut session, 3, 4); // pair (5,3) / (5,4)
    assert_eq!(session.current_player(), Player::Blue);

    // Blue measures (5,6): partner (5,0) turns Red.
    let m1 = session.measure(pos(5, 6)).unwrap();
    assert_eq!(m1.winners, 0);
    assert_eq!(m1.entangled_color, Player::Red);
    assert_eq!(session.board().color(pos(5, 0)), Some(Player::Red));

    // Red measures (5,1) directly.
    let m2 = session.measure(pos(5, 1)).unwrap();
    assert_eq!(m2.winners, 0);

    // Blue measures (5,4): partner (5,3) turns Red.
    let m3 = session.measure(pos(5, 4)).unwrap();
    assert_eq!(m3.winners, 0);
    assert_eq!(session.board().color(pos(5, 3)), Some(Player::Red));

    // Red measures (5,2): run (5,0)..(5,3) completes.
    let m4 = session.measure(pos(5, 2)).unwrap();
    assert_eq!(m4.winners, 1);
    assert_eq!(m4.result, Some(GameResult::Winner(Player::Red)));
    assert!(m4.game_over);
    assert!(session.is_game_over());
    assert_eq!(session.phase(), Phase::GameOver);

    let mut winning = m4.winning_cells.clone();
    winning.sort_by_key(|p| (p.row(), p.col()));
    assert_eq!(
        winning,
        vec![pos(5, 0), pos(5, 1), pos(5, 2), pos(5, 3)]
    );
    for p in winning {
        assert!(session.board().cell(p).is_win);
    }
    // The losing side's cells carry no highlight.
    assert!(!session.board().cell(pos(5, 6)).is_win);
}

/// Everything is rejected once the game is over.
#[test]
fn test_terminal_rejects_all_actions() {
    let mut session = GameSession::new();
    play_turn(&mut session, 0, 6);
    play_turn(&mut session, 1, 5);
    play_turn(&mut session, 2, 6);
    play_turn(&mut session, 3, 4);
    session.measure(pos(5, 6)).unwrap();
    session.measure(pos(5, 1)).unwrap();
    session.measure(pos(5, 4)).unwrap();
    session.measure(pos(5, 2)).unwrap();
    assert!(session.is_game_over());

    assert_eq!(session.place_token(1), Err(RulesError::GameAlreadyOver));
    assert_eq!(
        session.measure(pos(5, 5)),
        Err(RulesError::GameAlreadyOver)
    );
    assert!(!session.can_place());
    assert!(!session.can_measure());
}

/// One measurement completes a line for each player at once: the game
/// reports a tie while still marking both winning lines.
#[test]
fn test_double_winner_is_a_tie_with_both_lines_marked() {
    let mut session = GameSession::new();

    // Each turn pairs a bottom-row cell with a column-6 cell. After six
    // turns both row 5 and column 6 are full.
    for col in 0..6 {
        play_turn(&mut session, col, 6);
    }
    assert_eq!(session.current_player(), Player::Blue);

    // Partners collapse so that Red builds leftward along row 5 while
    // Blue builds downward along column 6.
    let m1 = session.measure(pos(5, 6)).unwrap(); // (5,6) Blue, (5,0) Red
    assert_eq!(m1.winners, 0);
    let m2 = session.measure(pos(5, 1)).unwrap(); // (5,1) Red, (4,6) Blue
    assert_eq!(m2.winners, 0);
    let m3 = session.measure(pos(3, 6)).unwrap(); // (3,6) Blue, (5,2) Red
    assert_eq!(m3.winners, 0);

    // Red's click finishes both runs in one collapse.
    let m4 = session.measure(pos(5, 3)).unwrap(); // (5,3) Red, (2,6) Blue
    assert_eq!(m4.winners, 2);
    assert_eq!(m4.result, Some(GameResult::Tie));
    assert!(m4.game_over);
    assert_eq!(m4.winning_cells.len(), 8);

    for p in [pos(5, 0), pos(5, 1), pos(5, 2), pos(5, 3)] {
        assert!(session.board().cell(p).is_win, "red line at {p}");
    }
    for p in [pos(5, 6), pos(4, 6), pos(3, 6), pos(2, 6)] {
        assert!(session.board().cell(p).is_win, "blue line at {p}");
    }
    assert_eq!(session.result(), Some(GameResult::Tie));
}

/// Target color for the drawn-board scenario below: the coloring
/// `(2*row + col) mod 4 >= 2` has no run longer than two in any of the
/// four directions, and alternates within every column.
fn drawn_target(p: CellPos) -> Player {
    if (2 * p.row() + p.col()) % 4 >= 2 {
        Player::Blue
    } else {
        Player::Red
    }
}

/// A complete 21-turn, 21-measurement game with no winner: the last
/// measurement finds the board fully colored and declares a tie.
#[test]
fn test_full_board_tie_with_zero_winners() {
    let mut session = GameSession::new();

    // Each turn drops one token on a Red-target cell and one on a
    // Blue-target cell, so every entangled pair can collapse into the
    // drawn coloring.
    let turns = [
        (2, 0), (0, 2), (2, 0), (0, 2), (2, 0), (0, 2),
        (3, 1), (1, 3), (3, 1), (1, 3), (3, 1), (1, 3),
        (6, 4), (4, 6), (6, 4), (4, 6), (6, 4), (4, 6),
        (5, 5), (5, 5), (5, 5),
    ];
    for (a, b) in turns {
        let first = session.place_token(a).unwrap();
        let second = session.place_token(b).unwrap();
        assert_ne!(
            drawn_target(first.position),
            drawn_target(second.position),
            "each pair must span both colors"
        );
    }
    assert_eq!(session.board().open_cells(), 0);

    // Measure every pair in placement order. The active player always
    // clicks the cell whose target matches their own color, so the
    // board converges on the drawn coloring.
    for turn in 1..=21u32 {
        let id = PlacementId::new(turn);
        let pair: Vec<CellPos> = session.board().pair_positions(id).to_vec();
        assert_eq!(pair.len(), 2);

        let active = session.current_player();
        let clicked = *pair
            .iter()
            .find(|&&p| drawn_target(p) == active)
            .expect("one cell of each pair matches the active player");

        let outcome = session.measure(clicked).unwrap();
        assert_eq!(outcome.measured_color, active);
        assert_eq!(outcome.entangled_color, active.opponent());

        if turn < 21 {
            assert_eq!(outcome.winners, 0);
            assert!(!outcome.game_over);
        } else {
            assert_eq!(outcome.winners, 0);
            assert_eq!(outcome.result, Some(GameResult::Tie));
            assert!(outcome.game_over);
        }
    }

    assert_eq!(session.result(), Some(GameResult::Tie));
    assert!(session.board().is_board_full());
    for p in CellPos::all() {
        assert!(!session.board().cell(p).is_win);
    }
}

// =============================================================================
// Player rotation
// =============================================================================

/// The player switches twice per round: once when the second token
/// lands, once more after a winner-less measurement.
#[test]
fn test_double_player_switch() {
    let mut session = GameSession::new();
    assert_eq!(session.current_player(), Player::Blue);

    for _ in 0..3 {
        let before = session.current_player();
        play_turn(&mut session, 0, 0);
        assert_eq!(session.current_player(), before.opponent());
    }
    // Blue, Red, Blue placed; Red is up and measures.
    assert_eq!(session.current_player(), Player::Red);
    let outcome = session.measure(pos(5, 0)).unwrap();
    assert_eq!(outcome.winners, 0);
    // Measurement hands the move straight back to Blue.
    assert_eq!(session.current_player(), Player::Blue);
    assert_eq!(session.phase(), Phase::AwaitingFirstToken);
}

/// Turn ordinal glyphs advance with the placement counter.
#[test]
fn test_turn_ordinal_labels() {
    let mut session = GameSession::new();
    assert_eq!(session.turn_ordinal_label(), "Α");
    play_turn(&mut session, 3, 4);
    assert_eq!(session.turn_ordinal_label(), "Β");
    play_turn(&mut session, 3, 4);
    assert_eq!(session.turn_ordinal_label(), "Γ");
}
