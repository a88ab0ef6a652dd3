use super::*;
use anyhow::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub prefix: Option<Prefix>,
    pub command: Command,
    pub args: Vec<String>,
    pub data: Option<String>,
}

impl Message {
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// The token a PING wants echoed back, trailing or not
    pub fn token(&self) -> Option<&str> {
        self.data()
            .or_else(|| self.args.first().map(String::as_str))
    }

    pub fn parse(input: &str) -> Result<Self> {
        let input = input
            .trim_end_matches(&['\r', '\n'][..])
            .trim_start_matches(' ');
        if input.is_empty() {
            anyhow::bail!("message was empty after trimming");
        }

        let mut parser = Parser::new(input);
        Ok(Self {
            prefix: parser.prefix(),
            command: parser.command()?,
            args: parser.args(),
            data: parser.data(),
        })
    }
}
