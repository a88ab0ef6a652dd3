/// Where a message came from
#[derive(Clone, Debug, PartialEq)]
pub enum Prefix {
    User {
        nick: String,
        user: String,
        host: String,
    },
    Server {
        host: String,
    },
}

impl Prefix {
    pub(super) fn parse(input: &str) -> Option<Self> {
        let input = input.strip_prefix(':')?;
        if input.is_empty() {
            return None;
        }

        input
            .find('!')
            .and_then(|pos| {
                input[pos..].find('@').map(|at| Self::User {
                    nick: input[..pos].to_string(),
                    user: input[pos + 1..pos + at].to_string(),
                    host: input[pos + at + 1..].to_string(),
                })
            })
            .or_else(|| {
                Some(Self::Server {
                    host: input.to_string(),
                })
            })
    }
}
