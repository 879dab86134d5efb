//! Terminal host for the todo view-controller.
//!
//! Reads line commands, turns them into document events, executes the
//! requests the controller dispatches over HTTP and prints the document.

pub mod command;
pub mod config;
pub mod host;
pub mod screen;
pub mod transport;

pub use command::{Command, ParseCommandError};
pub use config::Args;
pub use host::{Flow, Host};
pub use transport::{Transport, UreqTransport};
