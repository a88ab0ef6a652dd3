/// An IRC command, as far as the notifier cares about them
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The welcome reply (001), registration is complete
    Ready,
    /// The nickname we asked for is in use (433)
    NickCollision,
    /// The nickname we asked for is not allowed (432)
    ErroneousNick,
    /// When the server is checking the connection
    Ping,
    /// The server is about to close the link
    Error,
    /// Any other numeric reply
    Numeric(u16),
    /// An unknown event
    Unknown(Box<str>),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        match input {
            "001" => Command::Ready,
            "432" => Command::ErroneousNick,
            "433" => Command::NickCollision,
            "PING" => Command::Ping,
            "ERROR" => Command::Error,
            s => s
                .parse::<u16>()
                .map(Command::Numeric)
                .unwrap_or_else(|_| Command::Unknown(s.into())),
        }
    }
}
