use std::collections::HashSet;
use std::fmt::Display;

/// largest supported board, limited by the number of column letters (A..Z without I)
pub const MAXSIZE: usize = 25;

/// linear index into the padded grid, see `Board`
pub type Point = usize;

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
    Border,
}

// flip the color, i.e. Black -> White and White -> Black, Empty and Border stay as they are
impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            other => other,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
            Color::Empty => write!(f, "empty"),
            Color::Border => write!(f, "border"),
        }
    }
}

/*====================================================================================================================*/

/// Gomoku board on a padded grid.
///
/// Cells are addressed as `row * (size + 1) + col` with `row` and `col` in `1..=size`. Row 0, row `size + 1` and
/// column 0 are border cells, so stepping by `1`, `stride`, `stride + 1` or `stride - 1` from any stone lands either
/// on a real neighbour or on the border, never on a wrapped cell of another row.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Color>,
    current_player: Color,
}

impl Board {
    pub fn new(size: usize) -> Self {
        assert!((2..=MAXSIZE).contains(&size), "Board size {size} out of range");

        let mut board = Board {
            size,
            cells: Vec::new(),
            current_player: Color::Black,
        };
        board.reset(size);
        board
    }

    /// empty the board and resize it, Black moves first
    pub fn reset(&mut self, size: usize) {
        assert!((2..=MAXSIZE).contains(&size), "Board size {size} out of range");

        self.size = size;
        self.current_player = Color::Black;

        let stride = size + 1;
        self.cells = vec![Color::Border; stride * (size + 2) + 1];

        for row in 1..=size {
            let start = row * stride + 1;
            self.cells[start..start + size].fill(Color::Empty);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// distance between vertically adjacent cells
    pub fn stride(&self) -> usize {
        self.size + 1
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    pub fn point(&self, row: usize, col: usize) -> Point {
        row * self.stride() + col
    }

    pub fn get(&self, point: Point) -> Color {
        self.cells.get(point).copied().unwrap_or(Color::Border)
    }

    /// overwrite any cell, border included
    #[cfg(test)]
    pub fn set(&mut self, point: Point, color: Color) {
        self.cells[point] = color;
    }

    pub fn is_legal(&self, point: Point, color: Color) -> bool {
        matches!(color, Color::Black | Color::White) && self.get(point) == Color::Empty
    }

    /// Place a stone. Returns false and leaves the board untouched if the cell is occupied or off the board.
    pub fn play(&mut self, point: Point, color: Color) -> bool {
        if !self.is_legal(point, color) {
            return false;
        }

        self.cells[point] = color;
        self.current_player = !color;
        true
    }

    /// a pass only hands the move to the opponent
    pub fn play_pass(&mut self, color: Color) {
        self.current_player = !color;
    }

    /// inverse of `play`: clears the cell and gives the move back to `color`
    pub fn undo(&mut self, point: Point, color: Color) {
        debug_assert_eq!(self.get(point), color, "Undoing a stone that isn't there");

        self.cells[point] = Color::Empty;
        self.current_player = color;
    }

    pub fn empty_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Color::Empty)
            .map(|(point, _)| point)
            .collect()
    }

    /// every empty cell is a legal Gomoku move, an empty list means only a pass is left
    pub fn legal_moves(&self) -> Vec<Point> {
        self.empty_points()
    }

    pub fn stones_of(&self, color: Color) -> HashSet<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == color)
            .map(|(point, _)| point)
            .collect()
    }

    /// step `steps` times by `delta` from `point`, None if that leaves the cell array
    fn step(&self, point: Point, delta: isize, steps: isize) -> Option<Point> {
        let target = point as isize + delta * steps;
        (0..self.cells.len() as isize).contains(&target).then_some(target as Point)
    }

    /// the four line directions through a cell: horizontal, vertical and the two diagonals
    fn line_directions(&self) -> [isize; 4] {
        let stride = self.stride() as isize;
        [1, stride, stride + 1, stride - 1]
    }

    /// Returns whether someone has five (or more) in a row, and who.
    pub fn check_terminal(&self) -> (bool, Option<Color>) {
        for (point, &cell) in self.cells.iter().enumerate() {
            if !matches!(cell, Color::Black | Color::White) {
                continue;
            }

            for delta in self.line_directions() {
                // only count runs from their first stone
                if self.step(point, -delta, 1).map(|prev| self.get(prev)) == Some(cell) {
                    continue;
                }

                let run = (1..5)
                    .take_while(|&k| self.step(point, delta, k).map(|p| self.get(p)) == Some(cell))
                    .count();

                if run == 4 {
                    return (true, Some(cell));
                }
            }
        }

        (false, None)
    }

    /// Empty cells on a line through `node` that, once played by `color`, leave at least two distinct cells that
    /// would each complete five on that line. `node` has to hold a stone of `color`.
    pub fn open_four_points(&self, node: Point, color: Color) -> Vec<Point> {
        let mut points = Vec::new();

        if self.get(node) != color {
            return points;
        }

        for delta in self.line_directions() {
            for k in (-4..=4).filter(|&k| k != 0) {
                let Some(candidate) = self.step(node, delta, k) else {
                    continue;
                };

                if self.get(candidate) != Color::Empty || points.contains(&candidate) {
                    continue;
                }

                if self.completions_on_line(node, delta, color, candidate).len() >= 2 {
                    points.push(candidate);
                }
            }
        }

        points
    }

    /// Cells completing a five through `node` along `delta`, counting `extra` as if it held a stone of `color`.
    fn completions_on_line(&self, node: Point, delta: isize, color: Color, extra: Point) -> Vec<Point> {
        let mut completions = Vec::new();

        for start in 0..5 {
            let window: Option<Vec<Point>> = (0..5).map(|j| self.step(node, delta, j - start)).collect();
            let Some(window) = window else {
                continue;
            };

            let mut own = 0;
            let mut empty = Vec::new();

            for &p in &window {
                match self.get(p) {
                    _ if p == extra => own += 1,
                    cell if cell == color => own += 1,
                    Color::Empty => empty.push(p),
                    _ => {}
                }
            }

            if own == 4 && empty.len() == 1 && !completions.contains(&empty[0]) {
                completions.push(empty[0]);
            }
        }

        completions
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

        for row in (1..=self.size).rev() {
            write!(f, "{row:>2} ")?;

            for col in 1..=self.size {
                let symbol = match self.get(self.point(row, col)) {
                    Color::Black => 'X',
                    Color::White => 'O',
                    _ => '.',
                };
                write!(f, " {symbol}")?;
            }

            writeln!(f)?;
        }

        write!(f, "   ")?;
        for letter in COLUMN_LETTERS.chars().take(self.size) {
            write!(f, " {letter}")?;
        }

        Ok(())
    }
}

/*====================================================================================================================*/
