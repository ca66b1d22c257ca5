//! Tests for the grid rules engine.

use strictly_grid::{
    GameError, GameResult, GridInvariants, InvariantSet, Line, Notification, Player,
    RecordingObserver, RulesEngine, SoundCue,
};

fn play(engine: &mut RulesEngine, moves: &[(usize, usize)]) -> Vec<GameResult> {
    moves
        .iter()
        .map(|&(r, c)| engine.apply_move(r, c).expect("Valid move"))
        .collect()
}

#[test]
fn test_players_alternate_on_every_board_size() {
    for size in 3..=7 {
        let mut engine = RulesEngine::new(size).unwrap();
        assert_eq!(engine.current_player(), Player::One);
        // Fill column by column so no line completes before the board fills up.
        for turn in 1..=size {
            let expected = if turn % 2 == 1 { Player::One } else { Player::Two };
            assert_eq!(engine.current_player(), expected, "size {} turn {}", size, turn);
            assert_eq!(engine.apply_move(turn - 1, 0), Ok(GameResult::InProgress));
        }
    }
}

#[test]
fn test_no_win_before_minimum_turn() {
    for size in 3..=6 {
        let mut engine = RulesEngine::new(size).unwrap();
        let mut results = Vec::new();
        for column in 0..size {
            results.push(engine.apply_move(0, column).unwrap());
            if column + 1 < size {
                results.push(engine.apply_move(1, column).unwrap());
            }
        }
        let win_turn = 2 * size - 1;
        assert_eq!(results.len(), win_turn);
        assert!(results[..win_turn - 1].iter().all(|r| *r == GameResult::InProgress));
        assert_eq!(results[win_turn - 1], GameResult::Win(Player::One));
        assert_eq!(engine.turn_count(), win_turn);
    }
}

#[test]
fn test_row_win_scenario() {
    let recorder = RecordingObserver::new();
    let mut engine = RulesEngine::new(3).unwrap();
    engine.subscribe(Box::new(recorder.clone()));

    let results = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(results.last(), Some(&GameResult::Win(Player::One)));
    assert_eq!(engine.winning_line(), Some(Line::Row(0)));
    assert_eq!(recorder.last_game_over().as_deref(), Some("Player 1 has won!"));
    assert_eq!(recorder.turns_advanced(), 4);
    assert!(recorder.notifications().contains(&Notification::Sound {
        cue: SoundCue::GameOver,
        one_shot: true,
    }));
}

#[test]
fn test_column_win_for_player_two() {
    let mut engine = RulesEngine::new(3).unwrap();
    let results = play(&mut engine, &[(0, 0), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(results.last(), Some(&GameResult::Win(Player::Two)));
    assert_eq!(engine.winning_line(), Some(Line::Column(2)));
    assert_eq!(engine.winner(), Some(Player::Two));
}

#[test]
fn test_anti_diagonal_win() {
    let mut engine = RulesEngine::new(3).unwrap();
    let results = play(&mut engine, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(results.last(), Some(&GameResult::Win(Player::One)));
    assert_eq!(engine.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_draw_at_last_turn() {
    let recorder = RecordingObserver::new();
    let mut engine = RulesEngine::new(3).unwrap();
    engine.subscribe(Box::new(recorder.clone()));

    let results = play(
        &mut engine,
        &[(0, 0), (1, 1), (0, 2), (0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(results[..8].iter().all(|r| *r == GameResult::InProgress));
    assert_eq!(results[8], GameResult::Draw);
    assert_eq!(engine.turn_count(), 9);
    assert_eq!(recorder.last_game_over().as_deref(), Some("The game is a draw!"));
    assert_eq!(engine.apply_move(0, 0), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut engine = RulesEngine::new(4).unwrap();
    play(&mut engine, &[(1, 1), (2, 2)]);
    let board = engine.board().clone();
    let turn = engine.turn_count();

    assert_eq!(
        engine.apply_move(1, 1),
        Err(GameError::CellOccupied { row: 1, column: 1 })
    );
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.turn_count(), turn);
    assert_eq!(engine.moves_played(), 2);
    assert_eq!(engine.current_player(), Player::One);
}

#[test]
fn test_out_of_bounds_changes_nothing() {
    let mut engine = RulesEngine::new(3).unwrap();
    let board = engine.board().clone();

    assert_eq!(
        engine.apply_move(3, 0),
        Err(GameError::OutOfBounds { row: 3, column: 0, size: 3 })
    );
    assert!(matches!(engine.apply_move(0, 7), Err(GameError::OutOfBounds { .. })));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.turn_count(), 1);
    assert_eq!(engine.moves_played(), 0);
}

#[test]
fn test_moves_rejected_after_win() {
    let mut engine = RulesEngine::new(3).unwrap();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let board = engine.board().clone();

    assert_eq!(engine.apply_move(2, 2), Err(GameError::GameAlreadyOver));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.result(), GameResult::Win(Player::One));
}

#[test]
fn test_reset_twice_is_idempotent() {
    let mut engine = RulesEngine::new(4).unwrap();
    play(&mut engine, &[(0, 0), (3, 3), (2, 1)]);

    engine.reset();
    let first = (engine.board().clone(), engine.turn_count(), engine.moves_played(), engine.result());
    engine.reset();
    let second = (engine.board().clone(), engine.turn_count(), engine.moves_played(), engine.result());

    assert_eq!(first, second);
    assert_eq!(engine.size(), 4);
    assert_eq!(engine.turn_count(), 1);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.result(), GameResult::InProgress);
}

#[test]
fn test_reset_notifies_observers() {
    let recorder = RecordingObserver::new();
    let mut engine = RulesEngine::new(3).unwrap();
    engine.subscribe(Box::new(recorder.clone()));
    engine.reset();
    assert_eq!(recorder.notifications(), vec![Notification::TurnAdvanced]);
}

#[test]
fn test_create_board_changes_size() {
    let mut engine = RulesEngine::new(3).unwrap();
    play(&mut engine, &[(0, 0)]);
    engine.create_board(6).unwrap();
    assert_eq!(engine.size(), 6);
    assert_eq!(engine.turn_count(), 1);
    assert_eq!(engine.history().count(), 0);
    assert!(matches!(
        engine.create_board(2),
        Err(GameError::InvalidConfiguration(_))
    ));
    assert_eq!(engine.size(), 6);
}

#[test]
fn test_history_records_each_move() {
    let mut engine = RulesEngine::new(3).unwrap();
    play(&mut engine, &[(2, 2), (0, 1), (1, 0)]);

    let records: Vec<_> = engine.history().collect();
    assert_eq!(records.len(), 3);
    assert_eq!(*records[1].turn(), 2);
    assert_eq!(*records[1].player(), Player::Two);
    assert_eq!(records[1].position().row, 0);
    assert_eq!(records[1].position().column, 1);
    assert!(GridInvariants::check_all(&engine).is_ok());
}
