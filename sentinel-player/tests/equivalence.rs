//! Alpha-beta pruning must not change which move is chosen: for any board,
//! side and depth, `alpha_beta_move` and `minimax_move` agree exactly,
//! including the first-found tie-break. Checked over random legal play.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sentinel_othello::{Board, Player};
use sentinel_player::search::{alpha_beta_move, minimax_move, random_move};

/// Walk one random game, comparing both searches at every reachable position.
fn check_random_game(seed: u64, max_full_depth: u8) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut side = Player::Black;
    let mut passes = 0;
    let mut position = 0;

    while passes < 2 && board.count_empty() > 0 {
        if !board.has_any_legal_move(side) {
            passes += 1;
            side = !side;
            continue;
        }
        passes = 0;
        position += 1;

        for depth in 1..=max_full_depth {
            assert_eq!(
                minimax_move(&board, side, depth),
                alpha_beta_move(&board, side, depth),
                "searches disagree at depth {} with {} to move on:\n{}",
                depth,
                side,
                board
            );
        }
        // The deepest comparison is expensive unpruned; sample it.
        if position % 4 == 0 {
            let depth = max_full_depth + 1;
            assert_eq!(
                minimax_move(&board, side, depth),
                alpha_beta_move(&board, side, depth),
                "searches disagree at depth {} with {} to move on:\n{}",
                depth,
                side,
                board
            );
        }

        let mv = random_move(&board, side, &mut rng);
        board.make_move(mv, side);
        side = !side;
    }
}

#[test]
fn alpha_beta_matches_minimax_over_random_play() {
    check_random_game(0xA1FA, 2);
}

#[test]
fn alpha_beta_matches_minimax_on_a_second_line() {
    check_random_game(0xBE7A, 2);
}
