use std::collections::HashSet;
use std::fmt::Display;

use super::{Board, Color, Point};

/*====================================================================================================================*/

/// Scan five cells from `origin` along each of the eight signed stride offsets and return every cell that is the
/// only one of its five not in `stones`, i.e. the cell completing a five-in-a-row.
///
/// The eight offsets overlap pairwise (`+1` and `-1` walk the same row from opposite ends, and so on), each scan is
/// still counted on its own.
pub fn four_in_five(origin: Point, stones: &HashSet<Point>, size: usize) -> Vec<Point> {
    let s = (size + 1) as isize;
    let offsets = [1, s, s + 1, s - 1, -1, -s, -s + 1, -s - 1];
    let upper = s * s;
    let origin = origin as isize;

    let mut completions = Vec::new();

    for offset in offsets {
        let mut count = 0;
        let mut target = None;

        for k in 0..5 {
            let p = origin + k * offset;
            if p >= 0 && stones.contains(&(p as Point)) {
                count += 1;
            } else {
                target = Some(p);
            }
        }

        if count != 4 {
            continue;
        }

        if let Some(t) = target.filter(|&t| 0 < t && t < upper) {
            if !completions.contains(&(t as Point)) {
                completions.push(t as Point);
            }
        }
    }

    completions
}

/// Every empty cell where `color` completes five in a row with one more stone, gapped fours included.
pub fn win(board: &Board, color: Color) -> Vec<Point> {
    let stones = board.stones_of(color);

    // scan from the stones themselves, a window starting on an empty cell misses `XX_XX`
    let mut origins: Vec<Point> = stones.iter().copied().collect();
    origins.sort_unstable();

    let mut points = Vec::new();

    for origin in origins {
        for completion in four_in_five(origin, &stones, board.size()) {
            if board.get(completion) == Color::Empty && !points.contains(&completion) {
                points.push(completion);
            }
        }
    }

    points
}

/// Cells the side to move has to take to stop the opponent from winning next ply.
pub fn block_win(board: &Board) -> Vec<Point> {
    win(board, !board.current_player())
}

/// Cells where `color` creates a four with two open completions.
pub fn open_four(board: &Board, color: Color) -> Vec<Point> {
    let mut nodes: Vec<Point> = board.stones_of(color).into_iter().collect();
    nodes.sort_unstable();

    let mut points = Vec::new();

    for node in nodes {
        for point in board.open_four_points(node, color) {
            if !points.contains(&point) {
                points.push(point);
            }
        }
    }

    points
}

/// Cells that deny the opponent of `color` an open four.
pub fn block_open_four(board: &Board, color: Color) -> Vec<Point> {
    open_four(board, !color)
}

/*====================================================================================================================*/

/// The heuristic rules of the rule-based policy, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Win,
    BlockWin,
    OpenFour,
    BlockOpenFour,
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Win => write!(f, "Win"),
            Rule::BlockWin => write!(f, "BlockWin"),
            Rule::OpenFour => write!(f, "OpenFour"),
            Rule::BlockOpenFour => write!(f, "BlockOpenFour"),
        }
    }
}

/// The first rule that fires for `color` together with the cells it proposes.
pub fn first_rule(board: &Board, color: Color) -> Option<(Rule, Vec<Point>)> {
    let win_points = win(board, color);
    if !win_points.is_empty() {
        return Some((Rule::Win, win_points));
    }

    let block_win_points = block_win(board);
    if !block_win_points.is_empty() {
        return Some((Rule::BlockWin, block_win_points));
    }

    let open_four_points = open_four(board, color);
    if !open_four_points.is_empty() {
        return Some((Rule::OpenFour, open_four_points));
    }

    let block_open_four_points = block_open_four(board, color);
    if !block_open_four_points.is_empty() {
        return Some((Rule::BlockOpenFour, block_open_four_points));
    }

    None
}

/*====================================================================================================================*/
