use super::{Command, Prefix};

pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn prefix(&mut self) -> Option<Prefix> {
        let input = self.rest();
        if input.starts_with(':') {
            let pos = input.find(' ')?;
            self.pos += pos + 1;
            return Prefix::parse(&input[..pos]);
        }
        None
    }

    pub fn command(&mut self) -> anyhow::Result<Command> {
        let input = self.rest().trim_start_matches(' ');
        self.pos = self.input.len() - input.len();

        let end = input.find(' ').unwrap_or_else(|| input.len());
        if end == 0 {
            anyhow::bail!("command not found")
        }

        self.pos += end;
        Ok(Command::parse(&input[..end]))
    }

    pub fn args(&mut self) -> Vec<String> {
        let input = self.rest();
        // the trailing parameter starts at the first ' :', everything before are middles
        let end = if input.trim_start_matches(' ').starts_with(':') {
            input.find(':').unwrap_or(0)
        } else {
            input.find(" :").unwrap_or_else(|| input.len())
        };

        self.pos += end;
        input[..end]
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    }

    pub fn data(&mut self) -> Option<String> {
        let input = self.rest().trim_start_matches(' ');
        self.pos = self.input.len();
        input
            .strip_prefix(':')
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    }
}
