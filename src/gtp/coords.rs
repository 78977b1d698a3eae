use crate::gomoku::{Point, MAXSIZE};
use crate::gtp::GtpError;

/// column letters, `I` is skipped to avoid confusion with `J`
const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A move in protocol terms: a pass or a 1-based (row, col) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    Pass,
    At { row: usize, col: usize },
}

/// convert a board index (None for a pass) into (row, col)
pub fn point_to_coord(point: Option<Point>, board_size: usize) -> Coord {
    match point {
        None => Coord::Pass,
        Some(point) => {
            let ns = board_size + 1;
            Coord::At {
                row: point / ns,
                col: point % ns,
            }
        }
    }
}

pub fn coord_to_point(row: usize, col: usize, board_size: usize) -> Point {
    row * (board_size + 1) + col
}

/// format a coordinate as text such as `A1` or `pass`
pub fn format_point(coord: Coord) -> Result<String, GtpError> {
    match coord {
        Coord::Pass => Ok("pass".to_owned()),
        Coord::At { row, col } => {
            if !(1..=MAXSIZE).contains(&row) || !(1..=MAXSIZE).contains(&col) {
                return Err(GtpError::InvalidCoordinate(format!("{row},{col}")));
            }

            // in range, checked above
            let letter = COLUMN_LETTERS.as_bytes()[col - 1] as char;
            Ok(format!("{letter}{row}"))
        }
    }
}

/// Parse move text such as `c5` (case-insensitive) or `pass` for a board of `board_size`.
pub fn move_to_coord(point_str: &str, board_size: usize) -> Result<Coord, GtpError> {
    if !(2..=MAXSIZE).contains(&board_size) {
        return Err(GtpError::InvalidBoardSize(board_size.to_string()));
    }

    let s = point_str.to_lowercase();

    if s == "pass" {
        return Ok(Coord::Pass);
    }

    let wrong_coordinate = || GtpError::InvalidCoordinate(s.clone());

    let mut chars = s.chars();
    let col_c = chars.next().ok_or_else(wrong_coordinate)?;

    if !col_c.is_ascii_lowercase() || col_c == 'i' {
        return Err(wrong_coordinate());
    }

    let mut col = (col_c as u8 - b'a') as usize;
    if col_c < 'i' {
        col += 1;
    }

    let row: usize = chars.as_str().parse().map_err(|_| wrong_coordinate())?;

    if row < 1 || row > board_size || col > board_size {
        return Err(wrong_coordinate());
    }

    Ok(Coord::At { row, col })
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtp::GtpError;

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(Coord::At { row: 1, col: 1 }).unwrap(), "A1");
        assert_eq!(format_point(Coord::At { row: 8, col: 8 }).unwrap(), "H8");
        assert_eq!(format_point(Coord::At { row: 3, col: 9 }).unwrap(), "J3");
        assert_eq!(format_point(Coord::At { row: 25, col: 25 }).unwrap(), "Z25");
        assert_eq!(format_point(Coord::Pass).unwrap(), "pass");

        assert!(matches!(
            format_point(Coord::At { row: 0, col: 3 }),
            Err(GtpError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            format_point(Coord::At { row: 3, col: 26 }),
            Err(GtpError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_move_to_coord() {
        assert_eq!(move_to_coord("a1", 7).unwrap(), Coord::At { row: 1, col: 1 });
        assert_eq!(move_to_coord("H8", 19).unwrap(), Coord::At { row: 8, col: 8 });
        assert_eq!(move_to_coord("j10", 19).unwrap(), Coord::At { row: 10, col: 9 });
        assert_eq!(move_to_coord("PASS", 7).unwrap(), Coord::Pass);
    }

    #[test]
    fn test_move_to_coord_errors() {
        for text in ["", "i3", "a", "a0", "ax", "1a", "h8", "a8", "?3", "a-1"] {
            assert!(
                matches!(move_to_coord(text, 7), Err(GtpError::InvalidCoordinate(_))),
                "{text:?} should be rejected"
            );
        }

        assert!(matches!(move_to_coord("a1", 1), Err(GtpError::InvalidBoardSize(_))));
        assert!(matches!(move_to_coord("a1", 26), Err(GtpError::InvalidBoardSize(_))));
    }

    #[test]
    fn test_point_to_coord() {
        assert_eq!(point_to_coord(None, 7), Coord::Pass);
        assert_eq!(point_to_coord(Some(9), 7), Coord::At { row: 1, col: 1 });
        assert_eq!(point_to_coord(Some(coord_to_point(7, 3, 7)), 7), Coord::At { row: 7, col: 3 });
    }

    #[test]
    fn test_round_trip() {
        let size = 19;

        for row in 1..=size {
            for col in 1..=size {
                let point = coord_to_point(row, col, size);
                let text = format_point(point_to_coord(Some(point), size)).unwrap();

                assert_eq!(move_to_coord(&text, size).unwrap(), Coord::At { row, col });
                assert_eq!(format_point(move_to_coord(&text.to_lowercase(), size).unwrap()).unwrap(), text);
            }
        }
    }
}
