use super::*;
use crate::util::ConnectionError;

use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf,
};
use tokio::net::TcpStream;

use anyhow::{Context, Result};

#[derive(Copy, Clone, Debug)]
pub struct Registration<'a> {
    pub nick: &'a str,
    pub user: &'a str,
    pub real: &'a str,
}

pub struct Client<T> {
    read: BufReader<ReadHalf<T>>,
    write: WriteHalf<T>,
}

impl Client<TcpStream> {
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        TcpStream::connect((host, port))
            .await
            .map(Self::from_read_write)
            .map_err(|source| {
                ConnectionError {
                    addr: format!("{}:{}", host, port),
                    source,
                }
                .into()
            })
    }
}

impl<T> Client<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn from_read_write(inner: T) -> Self {
        let (read, write) = tokio::io::split(inner);
        let read = BufReader::new(read);
        Self { read, write }
    }

    pub async fn register(&mut self, reg: Registration<'_>) -> Result<()> {
        let Registration { nick, user, real } = reg;
        self.nick(nick).await?;
        self.write(format!("USER {} * 8 :{}", user, real)).await
    }

    /// Reads the next message, `None` once the server has closed the connection
    pub async fn read(&mut self) -> Result<Option<Message>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if 0 == self
                .read
                .read_until(b'\n', &mut buf)
                .await
                .context("cannot read message")?
            {
                return Ok(None);
            }

            // not every server speaks utf-8
            let line = String::from_utf8_lossy(&buf);
            log::trace!("<- {}", line.trim_end());

            match Message::parse(&line) {
                Ok(msg) => return Ok(Some(msg)),
                Err(err) => log::debug!("skipping '{}': {}", line.escape_debug(), err),
            }
        }
    }

    pub async fn write(&mut self, resp: impl ToString) -> Result<()> {
        let resp = resp.to_string();
        log::trace!("-> {}", resp);

        macro_rules! map {
            ($expr:expr) => {
                $expr.with_context(|| format!("line: {}", resp.escape_debug()))
            };
        }

        map!(self.write.write_all(resp.as_bytes()).await)?;
        map!(self.write.write_all(b"\r\n").await)?;
        map!(self.write.flush().await)
    }

    pub async fn nick(&mut self, nick: &str) -> Result<()> {
        self.write(format!("NICK {}", nick)).await
    }

    pub async fn join(&mut self, channel: &str) -> Result<()> {
        log::debug!("joining {}", channel);
        self.write(format!("JOIN {}", channel)).await
    }

    pub async fn privmsg(&mut self, target: &str, data: &str) -> Result<()> {
        self.write(format!("PRIVMSG {} :{}", target, data)).await
    }

    pub async fn pong(&mut self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => self.write(format!("PONG :{}", token)).await,
            None => self.write("PONG").await,
        }
    }

    pub async fn quit(&mut self, message: Option<&str>) -> Result<()> {
        match message {
            Some(message) => self.write(format!("QUIT :{}", message)).await,
            None => self.write("QUIT").await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt as _;

    #[tokio::test]
    async fn writes_lines() {
        let (local, mut remote) = tokio::io::duplex(1024);
        let mut client = Client::from_read_write(local);

        client
            .register(Registration {
                nick: "notifier-bot",
                user: "notify",
                real: "build notifier",
            })
            .await
            .unwrap();
        client.join("#test").await.unwrap();
        client.privmsg("#test", "hello world").await.unwrap();
        client.pong(Some("irc.example.net")).await.unwrap();
        client.quit(None).await.unwrap();
        client.quit(Some("bye")).await.unwrap();
        drop(client);

        let mut out = String::new();
        remote.read_to_string(&mut out).await.unwrap();
        assert_eq!(
            out,
            "NICK notifier-bot\r\n\
             USER notify * 8 :build notifier\r\n\
             JOIN #test\r\n\
             PRIVMSG #test :hello world\r\n\
             PONG :irc.example.net\r\n\
             QUIT\r\n\
             QUIT :bye\r\n"
        );
    }

    #[tokio::test]
    async fn reads_until_closed() {
        let (local, mut remote) = tokio::io::duplex(1024);
        let mut client = Client::from_read_write(local);

        remote
            .write_all(b":irc.example.net NOTICE * :hi\r\n\r\n\xffPING :abc\r\n")
            .await
            .unwrap();
        drop(remote);

        let msg = client.read().await.unwrap().unwrap();
        assert_eq!(msg.command, Command::Unknown("NOTICE".into()));

        // the blank line is skipped, the invalid byte is replaced
        let msg = client.read().await.unwrap().unwrap();
        assert_eq!(msg.command, Command::Unknown("\u{fffd}PING".into()));

        assert!(client.read().await.unwrap().is_none());
    }
}
