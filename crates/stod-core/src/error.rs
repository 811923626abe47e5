use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Options { msg: String },
    UnknownUnit { token: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Options { msg } => write!(f, "invalid options: {msg}"),
            Error::UnknownUnit { token } => write!(f, "unknown duration unit {token:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Options { msg: e.to_string() }
    }
}
