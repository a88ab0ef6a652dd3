use anyhow::Context as _;
use serde::Deserialize;

mod log_level;
pub use log_level::LogLevel;

mod invocation;
pub use invocation::Invocation;

/// Optional settings file, everything in it has a default
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub irc: Irc,
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read config file: {}", path.display()))?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).with_context(|| "invalid config toml")
    }
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Irc {
    /// Username sent with USER, defaults to the nickname
    pub user: Option<String>,
    /// Real name sent with USER, defaults to the nickname
    pub real: Option<String>,
    pub quit_message: Option<String>,
    /// Seconds to wait for the welcome reply, forever when unset
    pub register_timeout: Option<u64>,
}
