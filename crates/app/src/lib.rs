//! Showroom - command-line session for the catalog client
//!
//! Wires the reqwest transport and a credential store into the auth and
//! catalog stores, and drives the view models from typed line commands.

pub mod command;
pub mod session;

pub use command::{Command, HELP, ParseError};
pub use session::Session;
