//! Static positional evaluation of a board snapshot.

use sentinel_othello::{Board, Cell, Player, Square, GRID_CELLS};

/// A total-ordered evaluation result.
///
/// `Win` and `Loss` replace the float infinities a naive evaluator would use
/// for decided positions: the derived ordering puts `Loss` below every
/// `Heuristic` value and `Win` above, and heuristic values order by score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    Loss,
    Heuristic(i32),
    Win,
}

/// Positional weight of every cell, aligned with the board's flat index
/// space. Corners dominate; the cells that expose a corner are penalized;
/// border cells are unused. Some positions are better, some worse.
const WEIGHTS: [i32; GRID_CELLS] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0, //
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0, //
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0, //
    0,  20,  -5,   3,   3,   3,   3,  -5,  20,   0, //
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0, //
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0, //
    0,  20,  -5,   3,   3,   3,   3,  -5,  20,   0, //
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0, //
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0, //
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0, //
];

/// Evaluate `board` from `side`'s point of view.
///
/// Finished boards score `Win`/`Loss` by the piece-count leader (a tie is a
/// neutral heuristic 0); anything else scores the signed sum of positional
/// weights, adding `side`'s cells and subtracting the opponent's.
pub fn evaluate(board: &Board, side: Player) -> Score {
    if board.is_playable_over() {
        return match board.score().winner {
            Some(winner) if winner == side => Score::Win,
            Some(_) => Score::Loss,
            None => Score::Heuristic(0),
        };
    }

    let mut total = 0;
    for sq in Square::interior() {
        match board.get(sq) {
            Cell::Piece(owner) if owner == side => total += WEIGHTS[usize::from(sq)],
            Cell::Piece(_) => total -= WEIGHTS[usize::from(sq)],
            _ => {}
        }
    }
    Score::Heuristic(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        notation.parse().unwrap()
    }

    #[test]
    fn score_orders_totally() {
        assert!(Score::Loss < Score::Heuristic(i32::MIN));
        assert!(Score::Heuristic(i32::MAX) < Score::Win);
        assert!(Score::Heuristic(-3) < Score::Heuristic(5));
        assert!(Score::Loss < Score::Win);
    }

    #[test]
    fn opening_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Black), Score::Heuristic(0));
        assert_eq!(evaluate(&board, Player::White), Score::Heuristic(0));
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new();
        board.make_move(sq("D3"), Player::Black);
        board.make_move(sq("C5"), Player::White);
        let black = evaluate(&board, Player::Black);
        let white = evaluate(&board, Player::White);
        match (black, white) {
            (Score::Heuristic(b), Score::Heuristic(w)) => assert_eq!(b, -w),
            _ => panic!("midgame board evaluated as decided"),
        }
    }

    #[test]
    fn corners_outweigh_centers() {
        // Both positions still have legal moves, so both score heuristically.
        let corner = Board::from_squares(&[sq("A1")], &[sq("B1")]);
        let center = Board::from_squares(&[sq("D4")], &[sq("D5")]);
        assert!(!corner.is_playable_over() && !center.is_playable_over());
        assert_eq!(evaluate(&corner, Player::Black), Score::Heuristic(140));
        assert_eq!(evaluate(&center, Player::Black), Score::Heuristic(0));
    }

    #[test]
    fn finished_boards_are_decisive() {
        let board = Board::from_squares(&[sq("A1"), sq("A2")], &[sq("H8")]);
        assert!(board.is_playable_over());
        assert_eq!(evaluate(&board, Player::Black), Score::Win);
        assert_eq!(evaluate(&board, Player::White), Score::Loss);

        let tied = Board::from_squares(&[sq("A1")], &[sq("H8")]);
        assert_eq!(evaluate(&tied, Player::Black), Score::Heuristic(0));
    }
}
