//! Tests for the board state machine.

use caro::{
    Board, Cell, GameState, MoveError, Outcome, Player, Position, WIN_LINES, apply_move, evaluate,
    legal_moves, replay, reset,
};

/// Walks every reachable game, checking each accepted move.
fn walk(state: &GameState, visited: &mut usize) {
    *visited += 1;

    for index in legal_moves(state) {
        let mover = state.turn();
        let next = match apply_move(state, index) {
            Ok(next) => next,
            Err(MoveError::GameAlreadyOver(_)) => {
                assert!(state.is_over());
                continue;
            }
            Err(e) => panic!("legal move {} rejected: {}", index, e),
        };

        // Exactly one more cell, owned by the mover
        let changed: Vec<usize> = (0..9)
            .filter(|&i| state.board().get(i) != next.board().get(i))
            .collect();
        assert_eq!(changed, vec![index]);
        assert_eq!(next.board().get(index), Some(Cell::Occupied(mover)));

        // Turn flips only while the game continues
        if next.is_over() {
            assert_eq!(next.turn(), mover);
            assert_eq!(next.outcome(), evaluate(next.board()));
        } else {
            assert_eq!(next.turn(), mover.opponent());
            walk(&next, visited);
        }
    }
}

#[test]
fn test_every_game_moves_one_cell_and_alternates() {
    let mut visited = 0;
    walk(&GameState::new(), &mut visited);
    // Reachable non-terminal positions plus the root, counted with repetition
    assert!(visited > 100_000);
}

#[test]
fn test_initial_state() {
    let state = reset();
    assert_eq!(state.turn(), Player::X);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(legal_moves(&state), (0..9).collect::<Vec<_>>());
    assert_eq!(state, GameState::new());
}

#[test]
fn test_legal_moves_ascending_without_occupied() {
    let state = replay(&[4, 0, 8]).unwrap();
    assert_eq!(legal_moves(&state), vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_rejections_never_mutate() {
    let state = replay(&[4, 0]).unwrap();
    let before = state.clone();

    assert_eq!(apply_move(&state, 9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(apply_move(&state, usize::MAX), Err(MoveError::InvalidIndex(usize::MAX)));
    assert_eq!(
        apply_move(&state, 4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(state, before);
}

#[test]
fn test_terminal_state_rejects_moves() {
    // O wins the middle row
    let state = replay(&[0, 3, 1, 4, 8, 5]).unwrap();
    assert_eq!(state.outcome(), Outcome::Won(Player::O));
    assert_eq!(state.turn(), Player::O);

    let before = state.clone();
    for index in legal_moves(&state) {
        assert_eq!(
            apply_move(&state, index),
            Err(MoveError::GameAlreadyOver(Outcome::Won(Player::O)))
        );
    }
    assert_eq!(state, before);
}

#[test]
fn test_full_board_without_line_is_tie() {
    // X O X / X O O / O X X
    let state = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(state.board().to_compact(), "XOXXOOOXX");
    assert_eq!(state.outcome(), Outcome::Tie);
    assert!(legal_moves(&state).is_empty());
    assert_eq!(state.turn(), Player::X);
}

#[test]
fn test_win_on_last_cell_is_a_win() {
    // X completes the 0-4-8 diagonal with the ninth move
    let state = replay(&[0, 1, 2, 3, 7, 5, 8, 6, 4]).unwrap();
    assert_eq!(state.board().to_compact(), "XOXOXOOXX");
    assert_eq!(state.outcome(), Outcome::Won(Player::X));
    assert!(legal_moves(&state).is_empty());
}

#[test]
fn test_evaluate_matches_line_definition() {
    for line in WIN_LINES {
        for player in [Player::X, Player::O] {
            let cells = std::array::from_fn(|i| {
                if line.contains(&i) {
                    Cell::Occupied(player)
                } else {
                    Cell::Empty
                }
            });
            assert_eq!(evaluate(&Board::from_cells(cells)), Outcome::Won(player));
        }
    }
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_reset_from_any_state() {
    for moves in [&[][..], &[4][..], &[0, 3, 1, 4, 2][..], &[0, 1, 2, 4, 3, 5, 7, 6, 8][..]] {
        let state = replay(moves).unwrap();
        let fresh = state.reset();
        assert_eq!(fresh, GameState::new());
        assert_eq!(fresh.reset(), fresh);
    }
}

#[test]
fn test_board_text_form() {
    let board: Board = "xo_|_X_|__o".parse().unwrap();
    assert_eq!(board.to_compact(), "XO__X___O");
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.to_string(), "X|O|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");

    assert!("XO".parse::<Board>().is_err());
    assert!("XO_______Z".parse::<Board>().is_err());
    assert!("XO______Z".parse::<Board>().is_err());
}
