use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::agent::base_agent::terminal_score;
use crate::agent::guard::MoveGuard;
use crate::agent::Policy;
use crate::gomoku::{Board, Color};

/// rollout policy that plays uniformly random legal moves until the game is decided
pub struct RandomRollout;

impl Policy for RandomRollout {
    fn playout(&self, board: &mut Board, player: Color, to_play: Color, rng: &mut StdRng) -> f32 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        // a board filled up without five counts as not won
        let moves = board.legal_moves();
        let Some(&point) = moves.choose(rng) else {
            return 0.0;
        };

        match MoveGuard::play(board, point, to_play) {
            Some(mut guard) => self.playout(&mut guard, player, !to_play, rng),
            None => 0.0,
        }
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::RandomRollout;
    use crate::agent::Policy;
    use crate::gomoku::{Board, Color};

    #[test]
    fn test_playout_already_won() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(7);

        for col in 1..=5 {
            board.play(board.point(2, col), Color::Black);
        }

        assert_eq!(RandomRollout.playout(&mut board, Color::Black, Color::White, &mut rng), 1.0);
        assert_eq!(RandomRollout.playout(&mut board, Color::White, Color::White, &mut rng), 0.0);
    }

    #[test]
    fn test_playout_leaves_board_untouched() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(7);
        board.play(board.point(4, 4), Color::Black);

        for _ in 0..20 {
            let score = RandomRollout.playout(&mut board, Color::Black, Color::White, &mut rng);
            assert!(score == 0.0 || score == 1.0);
        }

        assert_eq!(board.empty_points().len(), 48);
        assert_eq!(board.current_player(), Color::White);
    }

    #[test]
    fn test_playout_full_board_is_no_win() {
        // a 2x2 board can never hold five in a row
        let mut board = Board::new(2);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(RandomRollout.playout(&mut board, Color::Black, Color::Black, &mut rng), 0.0);
        assert_eq!(board.empty_points().len(), 4);
    }

    #[test]
    fn test_select_takes_immediate_win() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(3);

        for col in 1..=4 {
            board.play(board.point(1, col), Color::Black);
            board.play(board.point(7, col + 2), Color::White);
        }

        let (point, score) = RandomRollout.select_move(&mut board, Color::Black, 10, &mut rng).unwrap();

        assert_eq!(point, board.point(1, 5));
        assert_eq!(score, 1.0);
    }
}
