mod commands;
mod connection;
pub mod coords;
mod error;
mod handlers;
mod session;

pub use commands::Command;
pub use connection::Connection;
pub use error::GtpError;
pub use session::Session;
