mod client;
pub use client::{Client, Registration};

mod command;
pub use command::Command;

mod message;
pub use message::Message;

mod parser;
use parser::Parser;

mod prefix;
pub use prefix::Prefix;
