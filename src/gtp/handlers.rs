use crate::agent::PolicyType;
use crate::gomoku::{threat, Color, Point, MAXSIZE};
use crate::gtp::coords::{coord_to_point, format_point, move_to_coord, point_to_coord, Coord};
use crate::gtp::{Command, GtpError, Session};

pub const ENGINE_NAME: &str = "Gomoku3";
pub const ENGINE_VERSION: &str = "1.0";

const ANALYZE_COMMANDS: &str = "pstring/Legal Moves For ToPlay/gogui-rules_legal_moves\n\
                                pstring/Side to Play/gogui-rules_side_to_move\n\
                                pstring/Final Result/gogui-rules_final_result\n\
                                pstring/Board Size/gogui-rules_board_size\n\
                                pstring/Rules GameID/gogui-rules_game_id\n\
                                pstring/Show Board/gogui-rules_board\n";

impl Command {
    /// Run the command against the session and return the response text. Argument count is checked by the caller.
    pub fn execute(self, session: &mut Session, args: &[String]) -> Result<String, GtpError> {
        match self {
            Command::ProtocolVersion => Ok("2".to_owned()),
            Command::Quit => Ok(String::new()),
            Command::Name => Ok(ENGINE_NAME.to_owned()),
            Command::Version => Ok(ENGINE_VERSION.to_owned()),
            Command::BoardSize => boardsize(session, &args[0]),
            Command::ShowBoard => Ok(format!("\n{}", session.board)),
            Command::ClearBoard => {
                let size = session.board.size();
                session.board.reset(size);
                Ok(String::new())
            }
            Command::Komi => {
                session.komi = args[0]
                    .parse()
                    .map_err(|_| GtpError::InvalidArgument(format!("komi \"{}\"", args[0])))?;
                session.debug_msg(&format!("Komi set to {}", session.komi));
                Ok(String::new())
            }
            Command::KnownCommand => Ok(Command::from_name(&args[0]).is_some().to_string()),
            Command::ListCommands => Ok(Command::ALL.map(Command::name).join(" ")),
            Command::Play => play(session, &args[0], &args[1]),
            Command::LegalMoves => {
                parse_color(&args[0])?;
                format_sorted(&session.board.legal_moves(), session.board.size())
            }
            Command::GenMove => genmove(session, &args[0]),
            Command::RulesGameId => Ok("Gomoku".to_owned()),
            Command::RulesBoardSize => Ok(session.board.size().to_string()),
            Command::RulesLegalMoves => {
                if session.board.check_terminal().0 {
                    return Ok(String::new());
                }
                format_sorted(&session.board.legal_moves(), session.board.size())
            }
            Command::RulesSideToMove => Ok(session.board.current_player().to_string()),
            Command::RulesBoard => Ok(rules_board(session)),
            Command::RulesFinalResult => Ok(final_result(session)),
            Command::AnalyzeCommands => Ok(ANALYZE_COMMANDS.to_owned()),
            Command::Policy => {
                session.policy = args[0].parse::<PolicyType>().map_err(GtpError::InvalidArgument)?;
                Ok(String::new())
            }
            Command::PolicyMoves => policy_moves(session),
        }
    }
}

/*====================================================================================================================*/

fn parse_color(arg: &str) -> Result<Color, GtpError> {
    match arg.to_lowercase().as_str() {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        _ => Err(GtpError::InvalidArgument(format!("color \"{arg}\""))),
    }
}

fn format_move(point: Point, board_size: usize) -> Result<String, GtpError> {
    // points come from our own board, failing to format one is a bug
    format_point(point_to_coord(Some(point), board_size)).map_err(|err| GtpError::Internal(err.to_string()))
}

/// moves as text, sorted by that text and space separated
fn format_sorted(points: &[Point], board_size: usize) -> Result<String, GtpError> {
    let mut moves = points
        .iter()
        .map(|&point| format_move(point, board_size))
        .collect::<Result<Vec<_>, _>>()?;

    moves.sort();
    Ok(moves.join(" "))
}

fn boardsize(session: &mut Session, arg: &str) -> Result<String, GtpError> {
    let size: usize = arg.parse().map_err(|_| GtpError::InvalidBoardSize(arg.to_owned()))?;

    if !(2..=MAXSIZE).contains(&size) {
        return Err(GtpError::InvalidBoardSize(arg.to_owned()));
    }

    session.board.reset(size);
    Ok(String::new())
}

fn play(session: &mut Session, color_arg: &str, move_arg: &str) -> Result<String, GtpError> {
    let color = match color_arg.to_lowercase().as_str() {
        "b" => Color::Black,
        "w" => Color::White,
        other => return Err(GtpError::IllegalMove(format!("\"{other}\" wrong color"))),
    };

    let coord = move_to_coord(move_arg, session.board.size()).map_err(|err| match err {
        GtpError::InvalidCoordinate(text) => GtpError::IllegalMove(format!("\"{text}\" wrong coordinate")),
        other => other,
    })?;

    let Coord::At { row, col } = coord else {
        session.board.play_pass(color);
        return Ok(String::new());
    };

    let point = coord_to_point(row, col, session.board.size());

    if !session.board.play(point, color) {
        return Err(GtpError::IllegalMove(format!("\"{move_arg}\" occupied")));
    }

    session.debug_msg(&format!("Move: {move_arg}\nBoard:\n{}\n", session.board));
    Ok(String::new())
}

fn genmove(session: &mut Session, color_arg: &str) -> Result<String, GtpError> {
    let color = parse_color(color_arg)?;

    if let (true, winner) = session.board.check_terminal() {
        let response = if winner == Some(color) { "pass" } else { "resign" };
        return Ok(response.to_owned());
    }

    let policy = session.policy.policy();
    let selected = policy.select_move(&mut session.board, color, session.playouts, &mut session.rng);

    let Some((point, score)) = selected else {
        session.board.play_pass(color);
        return Ok("pass".to_owned());
    };

    let move_text = format_move(point, session.board.size())?;

    if !session.board.play(point, color) {
        return Err(GtpError::IllegalMove(move_text));
    }

    session.debug_msg(&format!(
        "{} policy plays {move_text} for {color}, average score {score:.2}",
        session.policy
    ));
    Ok(move_text)
}

fn policy_moves(session: &Session) -> Result<String, GtpError> {
    let board = &session.board;
    let color = board.current_player();

    let rule = match session.policy {
        PolicyType::RuleBased => threat::first_rule(board, color),
        PolicyType::Random => None,
    };

    let (label, points) = match rule {
        Some((rule, points)) => (rule.to_string(), points),
        None => ("Random".to_owned(), board.legal_moves()),
    };

    if points.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("{label} {}", format_sorted(&points, board.size())?))
}

fn rules_board(session: &Session) -> String {
    let board = &session.board;
    let size = board.size();
    let mut text = String::with_capacity((size + 1) * size);

    for row in (1..=size).rev() {
        for col in 1..=size {
            text.push(match board.get(board.point(row, col)) {
                Color::Black => 'X',
                Color::White => 'O',
                _ => '.',
            });
        }
        text.push('\n');
    }

    text
}

fn final_result(session: &Session) -> String {
    let board = &session.board;

    match board.check_terminal() {
        (true, Some(winner)) => winner.to_string(),
        _ if board.empty_points().is_empty() => "draw".to_owned(),
        _ => "unknown".to_owned(),
    }
}
