use std::fmt::Display;

#[derive(Debug)]
pub enum GtpError {
    /// wrong number of arguments, carries the usage line of the command
    Usage(&'static str),
    UnknownCommand(String),
    /// reported as a regular response, not as a protocol error
    IllegalMove(String),
    InvalidCoordinate(String),
    InvalidBoardSize(String),
    InvalidArgument(String),
    /// a fault inside a handler that isn't the client's fault
    Internal(String),
    Io(std::io::Error),
}

impl GtpError {
    /// whether the error ends the session instead of being reported
    pub fn is_fatal(&self, fail_fast: bool) -> bool {
        match self {
            GtpError::Io(_) => true,
            GtpError::Internal(_) => fail_fast,
            _ => false,
        }
    }
}

impl Display for GtpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GtpError::Usage(usage) => write!(f, "{usage}"),
            GtpError::UnknownCommand(_) => write!(f, "Unknown command"),
            GtpError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            GtpError::InvalidCoordinate(coord) => write!(f, "illegal move: \"{coord}\" wrong coordinate"),
            GtpError::InvalidBoardSize(size) => write!(f, "invalid board size: {size}"),
            GtpError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GtpError::Internal(msg) => write!(f, "internal error: {msg}"),
            GtpError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for GtpError {}

impl From<std::io::Error> for GtpError {
    fn from(err: std::io::Error) -> Self {
        GtpError::Io(err)
    }
}

/*====================================================================================================================*/
