use std::time::Duration;

/// The server could not be reached
#[derive(Debug)]
pub struct ConnectionError {
    pub addr: String,
    pub source: std::io::Error,
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot connect to {}", self.addr)
    }
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The server never acknowledged our registration
#[derive(Debug)]
pub struct ProtocolTimeout {
    pub timeout: Duration,
}

impl std::fmt::Display for ProtocolTimeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "registration was not acknowledged within {:?}",
            self.timeout
        )
    }
}

impl std::error::Error for ProtocolTimeout {}

pub fn error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .enumerate()
        .fold(String::new(), |mut a, (i, err)| {
            a.push_str(&format!("\n[{}] --> ", i));
            a.push_str(&err.to_string());
            a
        })
}

pub fn inspect_err<F, D>(err: &anyhow::Error, kind: F)
where
    F: Fn() -> D,
    D: std::fmt::Display,
{
    log::warn!("{} because: {}", kind(), error_chain(err));
}
