use std::io::{BufRead, Write};

use crate::config::Config;
use crate::gtp::commands::parse_line;
use crate::gtp::{Command, GtpError, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Running,
    Terminated,
}

/// Line based request/response loop: one command per input line, one `= ...` or `? ...` response per command.
pub struct Connection<R, W> {
    input: R,
    output: W,

    session: Session,
    fail_fast: bool,
}

impl<R: BufRead, W: Write> Connection<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Connection {
            input,
            output,
            session: Session::new(config),
            fail_fast: config.fail_fast,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process commands until `quit` or end of input. Returns an error only for faults that end the session.
    pub fn run(&mut self) -> Result<(), GtpError> {
        let mut line = String::new();

        loop {
            line.clear();

            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            if self.process_line(&line)? == ConnectionState::Terminated {
                return Ok(());
            }
        }
    }

    pub fn process_line(&mut self, line: &str) -> Result<ConnectionState, GtpError> {
        let request = match parse_line(line) {
            None => return Ok(ConnectionState::Running),
            Some(Ok(request)) => request,
            Some(Err(msg)) => {
                self.session.debug_msg(&msg);
                self.error(&msg)?;
                return Ok(ConnectionState::Running);
            }
        };

        let Some(command) = Command::from_name(&request.name) else {
            self.session.debug_msg(&format!("Unknown command: {}", request.name));
            self.error(&GtpError::UnknownCommand(request.name).to_string())?;
            return Ok(ConnectionState::Running);
        };

        let (arity, usage) = command.arity();
        if request.args.len() != arity {
            self.error(&GtpError::Usage(usage).to_string())?;
            return Ok(ConnectionState::Running);
        }

        match command.execute(&mut self.session, &request.args) {
            Ok(response) => self.respond(&response)?,
            Err(err @ GtpError::IllegalMove(_)) => self.respond(&err.to_string())?,
            Err(err) if err.is_fatal(self.fail_fast) => {
                self.session.debug_msg(&format!("Error executing command {command}: {err}"));
                return Err(err);
            }
            Err(err) => {
                self.session.debug_msg(&format!("Error executing command {command}: {err}"));
                self.error(&err.to_string())?;
            }
        }

        if command == Command::Quit {
            return Ok(ConnectionState::Terminated);
        }

        Ok(ConnectionState::Running)
    }

    fn respond(&mut self, response: &str) -> std::io::Result<()> {
        write!(self.output, "= {response}\n\n")?;
        self.output.flush()
    }

    fn error(&mut self, msg: &str) -> std::io::Result<()> {
        write!(self.output, "? {msg}\n\n")?;
        self.output.flush()
    }
}

/*====================================================================================================================*/
