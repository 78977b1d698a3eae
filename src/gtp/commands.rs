use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

/*====================================================================================================================*/

/// One request line split into its parts. A leading numeric id, as used by regression test scripts, is stripped and
/// never echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub name: String,
    pub args: Vec<String>,
}

lazy_static! {
    static ref REQUEST_REGEX: Regex = Regex::new(
        &r"
^
\s*
\d*
\s*
(?P<cmd>\S+)
(?:
    \s+
    (?P<args>.*?)
)?
\s*
$
"
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>(),
    )
    .unwrap();
}

impl FromStr for Request {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = REQUEST_REGEX
            .captures(s)
            .ok_or(format!("request \"{}\" didn't match regex", s.trim()))?;

        // non-optional: if it didn't match, we already returned an Err earlier
        let name = captures.name("cmd").unwrap().as_str().to_owned();

        let args = captures
            .name("args")
            .map(|capture| capture.as_str().split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();

        Ok(Request { name, args })
    }
}

/// Parse a raw input line. None for blank lines, `#` comments and lines holding nothing but an id.
pub fn parse_line(line: &str) -> Option<Result<Request, String>> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(line.parse())
}

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ProtocolVersion,
    Quit,
    Name,
    BoardSize,
    ShowBoard,
    ClearBoard,
    Komi,
    Version,
    KnownCommand,
    GenMove,
    ListCommands,
    Play,
    LegalMoves,
    RulesGameId,
    RulesBoardSize,
    RulesLegalMoves,
    RulesSideToMove,
    RulesBoard,
    RulesFinalResult,
    AnalyzeCommands,
    Policy,
    PolicyMoves,
}

impl Command {
    /// all commands in the order `list_commands` reports them
    pub const ALL: [Command; 22] = [
        Command::ProtocolVersion,
        Command::Quit,
        Command::Name,
        Command::BoardSize,
        Command::ShowBoard,
        Command::ClearBoard,
        Command::Komi,
        Command::Version,
        Command::KnownCommand,
        Command::GenMove,
        Command::ListCommands,
        Command::Play,
        Command::LegalMoves,
        Command::RulesGameId,
        Command::RulesBoardSize,
        Command::RulesLegalMoves,
        Command::RulesSideToMove,
        Command::RulesBoard,
        Command::RulesFinalResult,
        Command::AnalyzeCommands,
        Command::Policy,
        Command::PolicyMoves,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::ProtocolVersion => "protocol_version",
            Command::Quit => "quit",
            Command::Name => "name",
            Command::BoardSize => "boardsize",
            Command::ShowBoard => "showboard",
            Command::ClearBoard => "clear_board",
            Command::Komi => "komi",
            Command::Version => "version",
            Command::KnownCommand => "known_command",
            Command::GenMove => "genmove",
            Command::ListCommands => "list_commands",
            Command::Play => "play",
            Command::LegalMoves => "legal_moves",
            Command::RulesGameId => "gogui-rules_game_id",
            Command::RulesBoardSize => "gogui-rules_board_size",
            Command::RulesLegalMoves => "gogui-rules_legal_moves",
            Command::RulesSideToMove => "gogui-rules_side_to_move",
            Command::RulesBoard => "gogui-rules_board",
            Command::RulesFinalResult => "gogui-rules_final_result",
            Command::AnalyzeCommands => "gogui-analyze_commands",
            Command::Policy => "policy",
            Command::PolicyMoves => "policy_moves",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// required number of arguments and the usage line reported when it doesn't match
    pub fn arity(self) -> (usize, &'static str) {
        match self {
            Command::BoardSize => (1, "Usage: boardsize INT"),
            Command::Komi => (1, "Usage: komi FLOAT"),
            Command::KnownCommand => (1, "Usage: known_command CMD_NAME"),
            Command::GenMove => (1, "Usage: genmove {w,b}"),
            Command::Play => (2, "Usage: play {b,w} MOVE"),
            Command::LegalMoves => (1, "Usage: legal_moves {w,b}"),
            Command::Policy => (1, "Usage: policy {random,rule_based}"),
            _ => (0, "Usage: command takes no arguments"),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::{parse_line, Command, Request};

    fn request(line: &str) -> Request {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let req = request("play b A1\n");

        assert_eq!(req.name, "play");
        assert_eq!(req.args, vec!["b", "A1"]);
    }

    #[test]
    fn test_parse_with_id() {
        let req = request("12 genmove w");
        assert_eq!(req.name, "genmove");
        assert_eq!(req.args, vec!["w"]);

        let req = request("3name");
        assert_eq!(req.name, "name");
        assert!(req.args.is_empty());

        // ids wider than any integer type are stripped all the same
        let req = request("123456789012345678901234567890 protocol_version");
        assert_eq!(req.name, "protocol_version");
        assert!(req.args.is_empty());
    }

    #[test]
    fn test_parse_whitespace() {
        let req = request("  \t boardsize    9   \r\n");

        assert_eq!(req.name, "boardsize");
        assert_eq!(req.args, vec!["9"]);
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \r\n").is_none());
        assert!(parse_line("# play b a1").is_none());
        assert!(parse_line("42").is_none());
    }

    #[test]
    fn test_command_names() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        }

        assert_eq!(Command::from_name("genmove"), Some(Command::GenMove));
        assert_eq!(Command::from_name("bogus"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Command::Play.arity().0, 2);
        assert_eq!(Command::GenMove.arity(), (1, "Usage: genmove {w,b}"));
        assert_eq!(Command::Name.arity().0, 0);
    }
}
