use crate::{
    config::Invocation,
    format,
    irc::{Client, Command, Registration},
    util::{inspect_err, ProtocolTimeout},
};

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// Longest line a server will relay, not counting the trailing CRLF
const MAX_LINE: usize = 510;

/// Room for the host part of the `:nick!user@host` prefix the server adds when relaying
const HOST_RESERVE: usize = 63;

/// Nickname to fall back to when the server refuses ours outright
const FALLBACK_NICK: &str = "defaultnick";

/// Where a connection is in its single run
///
/// A failed connect never produces a [`Notifier`]. `Failed` is a registration
/// that timed out, and is attached to the error [`Notifier::run`] returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Connected,
    Registered,
    Quitting,
    Terminated,
    Failed,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            State::Connected => "connected",
            State::Registered => "registered",
            State::Quitting => "quitting",
            State::Terminated => "connection ended",
            State::Failed => "registration failed",
        };
        f.write_str(state)
    }
}

/// How the connection ended
///
/// Every closure counts as a successful run. `quit_sent` tells a close we asked
/// for apart from one the server or the network decided on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub state: State,
    pub registered: bool,
    pub quit_sent: bool,
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        self.quit_sent
    }
}

/// Connects, registers, announces one message and quits
pub struct Notifier<T> {
    invocation: Invocation,
    client: Client<T>,
    nick: String,
    state: State,
    registered: bool,
    quit_sent: bool,
}

impl Notifier<TcpStream> {
    pub async fn connect(invocation: Invocation) -> anyhow::Result<Self> {
        log::info!("connecting to {}:{}", invocation.server, invocation.port);
        let client = Client::connect(&invocation.server, invocation.port).await?;
        log::debug!("connected");
        Ok(Self::new(invocation, client))
    }
}

impl<T> Notifier<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(invocation: Invocation, client: Client<T>) -> Self {
        Self {
            nick: invocation.nick.clone(),
            invocation,
            client,
            state: State::Connected,
            registered: false,
            quit_sent: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Drives the connection until it closes
    ///
    /// Only a registration timeout is an error here, any transport failure once
    /// connected just ends the run. A timeout error carries [`State::Failed`]
    /// as context.
    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        match self.session().await {
            Ok(()) => {}
            Err(err) if err.is::<ProtocolTimeout>() => {
                self.state = State::Failed;
                return Err(err.context(self.state));
            }
            Err(err) => inspect_err(&err, || "connection ended"),
        }

        self.state = State::Terminated;
        let outcome = Outcome {
            state: self.state,
            registered: self.registered,
            quit_sent: self.quit_sent,
        };
        log::debug!("connection closed: {:?}", outcome);
        Ok(outcome)
    }

    async fn session(&mut self) -> anyhow::Result<()> {
        let registered = match self.invocation.register_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.register())
                .await
                .map_err(|_| ProtocolTimeout { timeout })??,
            None => self.register().await?,
        };

        if !registered {
            log::warn!("connection closed before registration completed");
            return Ok(());
        }

        self.announce().await?;
        self.wait_for_close().await
    }

    async fn register(&mut self) -> anyhow::Result<bool> {
        let Invocation { user, real, .. } = &self.invocation;
        self.client
            .register(Registration {
                nick: &self.nick,
                user,
                real,
            })
            .await?;

        while let Some(msg) = self.client.read().await? {
            match msg.command {
                Command::Ready => {
                    log::info!("registered as {}", self.nick);
                    self.registered = true;
                    self.state = State::Registered;
                    return Ok(true);
                }

                Command::Ping => self.client.pong(msg.token()).await?,

                Command::NickCollision => {
                    let taken = msg.args.get(1).unwrap_or(&self.nick);
                    let nick = format!("{}_", taken);
                    log::info!("nickname {} is taken, trying {}", taken, nick);
                    self.client.nick(&nick).await?;
                    self.nick = nick;
                }

                Command::ErroneousNick if self.nick != FALLBACK_NICK => {
                    log::info!(
                        "nickname {} was refused, trying {}",
                        self.nick,
                        FALLBACK_NICK
                    );
                    self.client.nick(FALLBACK_NICK).await?;
                    self.nick = FALLBACK_NICK.to_string();
                }

                Command::ErroneousNick => {
                    log::error!("the server refused the fallback nickname {}", self.nick)
                }

                Command::Error => log::warn!("server error: {}", msg.data().unwrap_or_default()),

                _ => {}
            }
        }

        Ok(false)
    }

    async fn announce(&mut self) -> anyhow::Result<()> {
        let Invocation {
            channel,
            user,
            message,
            kind,
            join,
            quit_message,
            ..
        } = &self.invocation;

        if *join {
            // the JOIN reply isn't waited for, a slow server may see the message first
            self.client.join(channel).await?;
        }

        let reserve = format!(":{}!{}@ ", self.nick, user).len() + HOST_RESERVE;
        let command = format!("PRIVMSG {} :", channel).len();
        let limit = MAX_LINE.saturating_sub(reserve + command + format::COLOR_OVERHEAD);

        for line in format::split_lines(message, limit) {
            self.client.privmsg(channel, &kind.format(line)).await?;
        }
        log::info!("sent message to {}", channel);

        self.client.quit(quit_message.as_deref()).await?;
        self.quit_sent = true;
        self.state = State::Quitting;
        Ok(())
    }

    async fn wait_for_close(&mut self) -> anyhow::Result<()> {
        while let Some(msg) = self.client.read().await? {
            if let Command::Error = msg.command {
                log::debug!("closing: {}", msg.data().unwrap_or_default());
            }
        }
        Ok(())
    }
}
