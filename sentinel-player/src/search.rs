//! Move-selection strategies: random, greedy, minimax and alpha-beta.
//!
//! Every strategy requires the side to move to have at least one legal move;
//! the turn driver checks this before consulting a strategy. Trial moves are
//! applied to stack copies of the `Copy` board, so the caller's board is
//! never mutated.
//!
//! Depth counts total plies from the root: the root move application consumes
//! one ply, so each candidate subtree is searched `depth - 1` plies deep. A
//! side with no legal move at an interior node passes without consuming
//! depth; both sides being stuck is a terminal board, which is checked first,
//! so the recursion always bottoms out.

use crate::evaluate::{evaluate, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use sentinel_othello::{Board, Player, Square};

/// Fixed midgame look-ahead for minimax and alpha-beta.
pub const MIDGAME_DEPTH: u8 = 3;

/// Once fewer empties than this remain, search the whole game instead.
pub const ENDGAME_THRESHOLD: u8 = 8;

/// The look-ahead policy: 3 plies in the midgame, and the full remaining
/// game (which is optimal, not merely heuristic) once the end is near.
pub fn search_depth(board: &Board) -> u8 {
    let empties = board.count_empty();
    if empties < ENDGAME_THRESHOLD {
        empties
    } else {
        MIDGAME_DEPTH
    }
}

/// Choose uniformly among the legal moves.
pub fn random_move<R: Rng>(board: &Board, side: Player, rng: &mut R) -> Square {
    *board
        .legal_moves(side)
        .choose(rng)
        .expect("strategy invoked with no legal move")
}

/// Choose the move whose immediate resulting position evaluates best for the
/// mover. The first candidate seeds the maximum; ties keep the earliest.
pub fn greedy_move(board: &Board, side: Player) -> Square {
    let mut best: Option<(Square, Score)> = None;
    for mv in board.legal_moves(side) {
        let mut trial = *board;
        trial.make_move(mv, side);
        let score = evaluate(&trial, side);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((mv, score));
        }
    }
    best.expect("strategy invoked with no legal move").0
}

/// Choose a move by unpruned minimax search `depth` plies deep.
/// Ties keep the earliest candidate, consistent with [`greedy_move`].
pub fn minimax_move(board: &Board, side: Player, depth: u8) -> Square {
    let mut best: Option<(Square, Score)> = None;
    for mv in board.legal_moves(side) {
        let mut child = *board;
        child.make_move(mv, side);
        let score = minimize(&child, side, depth.saturating_sub(1));
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((mv, score));
        }
    }
    best.expect("strategy invoked with no legal move").0
}

/// Choose a move by alpha-beta search `depth` plies deep.
///
/// Each candidate is scored with a full `(Loss, Win)` window, so its value is
/// exact and the chosen move is identical to [`minimax_move`]'s for any
/// board, side and depth, including the first-found tie-break.
pub fn alpha_beta_move(board: &Board, side: Player, depth: u8) -> Square {
    let mut best: Option<(Square, Score)> = None;
    for mv in board.legal_moves(side) {
        let mut child = *board;
        child.make_move(mv, side);
        let score = ab_minimize(&child, side, depth.saturating_sub(1), Score::Loss, Score::Win);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((mv, score));
        }
    }
    best.expect("strategy invoked with no legal move").0
}

/// Best score `side` can force with `side` to move.
fn maximize(board: &Board, side: Player, depth: u8) -> Score {
    if depth == 0 || board.is_playable_over() {
        return evaluate(board, side);
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return minimize(board, side, depth);
    }
    let mut best = Score::Loss;
    for mv in moves {
        let mut child = *board;
        child.make_move(mv, side);
        best = best.max(minimize(&child, side, depth - 1));
    }
    best
}

/// Best score `side` can force with the opponent to move: the opponent picks
/// the mover's worst outcome.
fn minimize(board: &Board, side: Player, depth: u8) -> Score {
    if depth == 0 || board.is_playable_over() {
        return evaluate(board, side);
    }
    let moves = board.legal_moves(!side);
    if moves.is_empty() {
        return maximize(board, side, depth);
    }
    let mut worst = Score::Win;
    for mv in moves {
        let mut child = *board;
        child.make_move(mv, !side);
        worst = worst.min(maximize(&child, side, depth - 1));
    }
    worst
}

/// [`maximize`] carrying an `(alpha, beta)` window; siblings stop expanding
/// as soon as `beta <= alpha`.
fn ab_maximize(board: &Board, side: Player, depth: u8, mut alpha: Score, beta: Score) -> Score {
    if depth == 0 || board.is_playable_over() {
        return evaluate(board, side);
    }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return ab_minimize(board, side, depth, alpha, beta);
    }
    let mut best = Score::Loss;
    for mv in moves {
        let mut child = *board;
        child.make_move(mv, side);
        best = best.max(ab_minimize(&child, side, depth - 1, alpha, beta));
        alpha = alpha.max(best);
        if beta <= alpha {
            break;
        }
    }
    best
}

/// [`minimize`] carrying an `(alpha, beta)` window.
fn ab_minimize(board: &Board, side: Player, depth: u8, alpha: Score, mut beta: Score) -> Score {
    if depth == 0 || board.is_playable_over() {
        return evaluate(board, side);
    }
    let moves = board.legal_moves(!side);
    if moves.is_empty() {
        return ab_maximize(board, side, depth, alpha, beta);
    }
    let mut worst = Score::Win;
    for mv in moves {
        let mut child = *board;
        child.make_move(mv, !side);
        worst = worst.min(ab_maximize(&child, side, depth - 1, alpha, beta));
        beta = beta.min(worst);
        if beta <= alpha {
            break;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sq(notation: &str) -> Square {
        notation.parse().unwrap()
    }

    #[test]
    fn random_move_is_legal() {
        let board = Board::new();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = random_move(&board, Player::Black, &mut rng);
            assert!(board.legal_move(mv, Player::Black).is_some());
        }
    }

    #[test]
    fn strategies_leave_the_board_untouched() {
        let board = Board::new();
        let before = board;
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        random_move(&board, Player::Black, &mut rng);
        greedy_move(&board, Player::Black);
        minimax_move(&board, Player::Black, 3);
        alpha_beta_move(&board, Player::Black, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn greedy_ties_keep_the_earliest_move() {
        // All four opening moves are symmetric and score identically, so
        // greedy must keep the first one in square order.
        let board = Board::new();
        assert_eq!(greedy_move(&board, Player::Black), sq("D3"));
    }

    #[test]
    fn minimax_at_depth_one_matches_greedy() {
        let mut board = Board::new();
        let mut side = Player::Black;
        for _ in 0..12 {
            if !board.has_any_legal_move(side) {
                side = !side;
                continue;
            }
            assert_eq!(minimax_move(&board, side, 1), greedy_move(&board, side));
            // Advance along some fixed line to vary the positions.
            let mv = greedy_move(&board, side);
            board.make_move(mv, side);
            side = !side;
        }
    }

    #[test]
    fn search_finds_the_winning_capture() {
        // Black to move on a near-full row: E1 flips the whole white run
        // against A1 and wins outright on a dead board.
        let board = Board::from_squares(
            &[sq("A1")],
            &[sq("B1"), sq("C1"), sq("D1")],
        );
        let mv = minimax_move(&board, Player::Black, 3);
        assert_eq!(mv, sq("E1"));
        assert_eq!(alpha_beta_move(&board, Player::Black, 3), sq("E1"));
    }

    #[test]
    fn depth_policy_switches_near_the_end() {
        let opening = Board::new();
        assert_eq!(search_depth(&opening), MIDGAME_DEPTH);

        // 57 of 64 squares filled: 7 empties left, below the threshold.
        let mut crowded: Vec<Square> = Square::interior().collect();
        crowded.truncate(57);
        let board = Board::from_squares(&crowded, &[]);
        assert_eq!(board.count_empty(), 7);
        assert_eq!(search_depth(&board), 7);
    }
}
