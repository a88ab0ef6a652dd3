use crate::{config::LogLevel, format::Kind};
use clap::Parser;
use std::path::PathBuf;

/// Sends a single message to an IRC channel, then quits
#[derive(Parser, Debug, Clone)]
#[command(name = "irc-notify")]
pub struct Args {
    /// The IRC server to connect to
    #[arg(short = 's', value_name = "SERVER")]
    pub server: String,

    /// The port to connect to
    #[arg(short = 'p', value_name = "PORT", default_value_t = 6667)]
    pub port: u16,

    /// The channel to announce in
    #[arg(short = 'c', value_name = "CHANNEL")]
    pub channel: String,

    /// The nickname to use
    #[arg(short = 'n', value_name = "NICK")]
    pub nick: String,

    /// Type of message to send
    #[arg(short = 't', long = "type", value_enum, default_value_t = Kind::Regular)]
    pub kind: Kind,

    /// Send the message to the channel without joining it
    #[arg(long = "nojoin")]
    pub no_join: bool,

    /// Read extra settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Give up if registration is not acknowledged within this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// The message to send
    pub message: String,
}
