use std::ops::{Deref, DerefMut};

use crate::gomoku::{Board, Color, Point};

/// A stone placed on a borrowed board, taken back again when the guard is dropped.
///
/// Rollouts recurse through `&mut *guard`, so every simulated move is undone on the way out no matter how the
/// recursion returns. Dropping also restores the side to move from before the move.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    point: Point,
    color: Color,
    previous_player: Color,
}

impl<'a> MoveGuard<'a> {
    /// None if the move is illegal, the board is untouched in that case
    pub fn play(board: &'a mut Board, point: Point, color: Color) -> Option<Self> {
        let previous_player = board.current_player();

        if board.play(point, color) {
            Some(MoveGuard {
                board,
                point,
                color,
                previous_player,
            })
        } else {
            None
        }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo(self.point, self.color);
        self.board.set_current_player(self.previous_player);
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::MoveGuard;
    use crate::gomoku::{Board, Color};

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut board = Board::new(7);
        let point = board.point(4, 4);

        {
            let guard = MoveGuard::play(&mut board, point, Color::White).unwrap();
            assert_eq!(guard.get(point), Color::White);
            assert_eq!(guard.current_player(), Color::Black);
        }

        assert_eq!(board.get(point), Color::Empty);
        assert_eq!(board.current_player(), Color::Black);
    }

    #[test]
    fn test_guard_nested() {
        let mut board = Board::new(7);
        let (a, b) = (board.point(1, 1), board.point(2, 2));

        {
            let mut outer = MoveGuard::play(&mut board, a, Color::Black).unwrap();
            {
                let inner = MoveGuard::play(&mut outer, b, Color::White).unwrap();
                assert_eq!(inner.stones_of(Color::Black).len() + inner.stones_of(Color::White).len(), 2);
            }
            assert_eq!(outer.get(b), Color::Empty);
            assert_eq!(outer.current_player(), Color::White);
        }

        assert_eq!(board.empty_points().len(), 49);
        assert_eq!(board.current_player(), Color::Black);
    }

    #[test]
    fn test_guard_rejects_occupied() {
        let mut board = Board::new(7);
        let point = board.point(3, 3);
        board.play(point, Color::Black);

        assert!(MoveGuard::play(&mut board, point, Color::White).is_none());
        assert_eq!(board.get(point), Color::Black);
        assert_eq!(board.current_player(), Color::White);
    }
}
