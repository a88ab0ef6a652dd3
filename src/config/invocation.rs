use super::Config;
use crate::{cli::Args, format::Kind};

use std::time::Duration;

/// Everything a single run needs, fixed before connecting
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub server: String,
    pub port: u16,
    pub channel: String,
    pub nick: String,
    pub user: String,
    pub real: String,
    pub message: String,
    pub kind: Kind,
    pub join: bool,
    pub quit_message: Option<String>,
    pub register_timeout: Option<Duration>,
}

impl Invocation {
    /// Merges the command line with the config file, the command line wins
    pub fn new(args: Args, config: &Config) -> anyhow::Result<Self> {
        let Args {
            server,
            port,
            channel,
            nick,
            kind,
            no_join,
            timeout,
            message,
            ..
        } = args;

        check_host(&server)?;
        check_token("nickname", &nick)?;
        check_token("channel", &channel)?;

        let user = config.irc.user.clone().unwrap_or_else(|| nick.clone());
        check_token("username", &user)?;

        let real = config.irc.real.clone().unwrap_or_else(|| nick.clone());
        check_line("real name", &real)?;

        let quit_message = config.irc.quit_message.clone();
        if let Some(quit) = &quit_message {
            check_line("quit message", quit)?;
        }

        if message.trim().is_empty() {
            anyhow::bail!("message is empty")
        }

        Ok(Self {
            server,
            port,
            channel: channel_name(channel),
            nick,
            user,
            real,
            message,
            kind,
            join: !no_join,
            quit_message,
            register_timeout: timeout
                .or(config.irc.register_timeout)
                .map(Duration::from_secs),
        })
    }
}

const CHANNEL_PREFIXES: &[char] = &['#', '&', '+', '!'];

fn channel_name(channel: String) -> String {
    if channel.starts_with(CHANNEL_PREFIXES) {
        channel
    } else {
        format!("#{}", channel)
    }
}

fn check_token(what: &str, input: &str) -> anyhow::Result<()> {
    if input.is_empty() {
        anyhow::bail!("{} is empty", what)
    }
    if input.starts_with(':') || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        anyhow::bail!("invalid {}: '{}'", what, input.escape_debug())
    }
    Ok(())
}

// only used to connect, so it never has to be a valid irc token
fn check_host(input: &str) -> anyhow::Result<()> {
    if input.is_empty() {
        anyhow::bail!("server is empty")
    }
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        anyhow::bail!("invalid server: '{}'", input.escape_debug())
    }
    Ok(())
}

fn check_line(what: &str, input: &str) -> anyhow::Result<()> {
    if input.contains(&['\r', '\n', '\0'][..]) {
        anyhow::bail!("invalid {}: '{}'", what, input.escape_debug())
    }
    Ok(())
}
