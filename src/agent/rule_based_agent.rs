use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::agent::base_agent::{terminal_score, DRAW_SCORE};
use crate::agent::guard::MoveGuard;
use crate::agent::Policy;
use crate::gomoku::{threat, Board, Color};

/// Rollout policy that follows the first heuristic rule that fires each ply (win, block a win, make an open four,
/// block an open four) and plays a random legal move otherwise.
pub struct RuleBasedRollout;

impl Policy for RuleBasedRollout {
    fn playout(&self, board: &mut Board, player: Color, to_play: Color, rng: &mut StdRng) -> f32 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        let moves = match threat::first_rule(board, to_play) {
            Some((_rule, points)) => points,
            None => board.legal_moves(),
        };

        let Some(&point) = moves.choose(rng) else {
            return DRAW_SCORE;
        };

        match MoveGuard::play(board, point, to_play) {
            Some(mut guard) => self.playout(&mut guard, player, !to_play, rng),
            None => DRAW_SCORE,
        }
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::RuleBasedRollout;
    use crate::agent::Policy;
    use crate::gomoku::{Board, Color};

    #[test]
    fn test_playout_takes_win() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(11);

        for col in 1..=4 {
            board.play(board.point(1, col), Color::White);
            board.play(board.point(4, col + 1), Color::Black);
        }
        board.set_current_player(Color::White);

        // White to move always completes its five first
        for _ in 0..10 {
            assert_eq!(RuleBasedRollout.playout(&mut board, Color::White, Color::White, &mut rng), 1.0);
            assert_eq!(RuleBasedRollout.playout(&mut board, Color::Black, Color::White, &mut rng), 0.0);
        }

        assert_eq!(board.empty_points().len(), 41);
    }

    #[test]
    fn test_playout_blocks_win() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(11);

        // White threatens 1,5, whatever the playout does has to be unwound again
        board.play(board.point(1, 1), Color::White);
        for col in 2..=4 {
            board.play(board.point(1, col), Color::White);
        }
        board.set_current_player(Color::Black);

        let score = RuleBasedRollout.playout(&mut board, Color::White, Color::Black, &mut rng);
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(board.empty_points().len(), 45);
        assert_eq!(board.current_player(), Color::Black);
    }

    #[test]
    fn test_playout_full_board_is_draw() {
        let mut board = Board::new(3);
        let mut rng = StdRng::seed_from_u64(11);

        assert_eq!(RuleBasedRollout.playout(&mut board, Color::Black, Color::Black, &mut rng), 0.5);
        assert_eq!(board.empty_points().len(), 9);
    }

    #[test]
    fn test_select_winning_block() {
        let mut board = Board::new(7);
        let mut rng = StdRng::seed_from_u64(5);

        for row in 1..=4 {
            board.play(board.point(row, 7), Color::White);
        }
        board.play(board.point(5, 2), Color::White);
        for col in 3..=6 {
            board.play(board.point(5, col), Color::Black);
        }
        board.set_current_player(Color::Black);

        // 5,7 completes Black's row and blocks White's column, any other move lets White win next ply
        let (point, score) = RuleBasedRollout.select_move(&mut board, Color::Black, 10, &mut rng).unwrap();

        assert_eq!(point, board.point(5, 7));
        assert_eq!(score, 1.0);
    }
}
