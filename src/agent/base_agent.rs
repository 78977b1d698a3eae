use std::fmt::Display;
use std::str::FromStr;

use rand::rngs::StdRng;

use crate::agent::guard::MoveGuard;
use crate::agent::{RandomRollout, RuleBasedRollout};
use crate::gomoku::{Board, Color, Point};

/// Score of a simulated game that ended without a winner.
pub const DRAW_SCORE: f32 = 0.5;

pub trait Policy {
    /// Play one simulated game from the current position with `to_play` moving next and score it for `player`:
    /// 1 for a win, 0 for a loss.
    fn playout(&self, board: &mut Board, player: Color, to_play: Color, rng: &mut StdRng) -> f32;

    /// Try every legal move for `color`, run `playouts` simulations after each and return the move with the best
    /// average score. Equal averages keep the earlier move. None if no legal move is left.
    fn select_move(&self, board: &mut Board, color: Color, playouts: usize, rng: &mut StdRng) -> Option<(Point, f32)> {
        let mut best: Option<(Point, f32)> = None;

        for point in board.legal_moves() {
            let Some(mut guard) = MoveGuard::play(board, point, color) else {
                continue;
            };

            let mut total = 0.0;
            for _ in 0..playouts {
                total += self.playout(&mut guard, color, !color, rng);
            }
            let score = total / playouts.max(1) as f32;

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((point, score)),
            }
        }

        best
    }
}

/// terminal score of a finished game for `player`
pub(super) fn terminal_score(board: &Board, player: Color) -> Option<f32> {
    match board.check_terminal() {
        (true, Some(winner)) if winner == player => Some(1.0),
        (true, _) => Some(0.0),
        (false, _) => None,
    }
}

/*====================================================================================================================*/

/// The policy `genmove` and `policy_moves` use, switched with the `policy` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyType {
    #[default]
    Random,
    RuleBased,
}

impl PolicyType {
    pub fn policy(self) -> Box<dyn Policy> {
        match self {
            PolicyType::Random => Box::new(RandomRollout),
            PolicyType::RuleBased => Box::new(RuleBasedRollout),
        }
    }
}

impl FromStr for PolicyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(PolicyType::Random),
            "rule_based" => Ok(PolicyType::RuleBased),
            _ => Err(format!("Unknown policy \"{s}\"")),
        }
    }
}

impl Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyType::Random => write!(f, "random"),
            PolicyType::RuleBased => write!(f, "rule_based"),
        }
    }
}

/*====================================================================================================================*/
