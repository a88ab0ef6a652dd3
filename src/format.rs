/// mIRC colour control byte, starts and resets a colour run
pub const COLOR: char = '\x03';

/// Bytes the colour escapes add to a line
pub const COLOR_OVERHEAD: usize = 3;

/// Chunks are never split smaller than this, whatever the line budget says
const MIN_CHUNK: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Green = 3,
    Red = 4,
}

pub fn colorize(color: Color, text: &str) -> String {
    format!("{}{}{}{}", COLOR, color as u8, text, COLOR)
}

/// How a message is classified, which decides its colour
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Success,
    Fail,
    Regular,
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Regular
    }
}

impl Kind {
    pub fn color(self) -> Option<Color> {
        match self {
            Kind::Success => Some(Color::Green),
            Kind::Fail => Some(Color::Red),
            Kind::Regular => None,
        }
    }

    pub fn format(self, text: &str) -> String {
        match self.color() {
            Some(color) => colorize(color, text),
            None => text.to_string(),
        }
    }
}

/// Splits `text` into lines that can each be sent on their own
///
/// CR and LF both break lines, blank lines are dropped, and anything longer
/// than `limit` bytes is cut on a char boundary.
pub fn split_lines(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(MIN_CHUNK);
    let mut out = vec![];

    for mut line in text.split(&['\r', '\n'][..]) {
        if line.trim().is_empty() {
            continue;
        }

        while line.len() > limit {
            let mut at = limit;
            while !line.is_char_boundary(at) {
                at -= 1;
            }
            let (head, tail) = line.split_at(at);
            out.push(head);
            line = tail;
        }

        if !line.is_empty() {
            out.push(line);
        }
    }

    out
}
