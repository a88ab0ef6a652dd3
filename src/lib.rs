/*!
irc-notify. sends a single message to an irc channel, then quits

Connects, registers a nickname, optionally joins the channel, says one
(possibly coloured) message and quits. Nothing is kept between runs.
*/

/// Command line arguments
pub mod cli;

/// Configuration
pub mod config;

/// IRC client and types
pub mod irc;

/// Message colouring and line splitting
pub mod format;

mod notifier;
pub use notifier::{Notifier, Outcome, State};

mod util;
pub use util::{error_chain, ConnectionError, ProtocolTimeout};
