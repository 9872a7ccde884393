use std::{fmt, io};

/// Exit status for a run that stopped on a usage error.
pub const EXIT_USAGE: i32 = 0;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_REMOTE: i32 = 3;
pub const EXIT_IO: i32 = 4;

/// Every way an `amp` run can fail.
///
/// All variants except [`AmpError::Usage`] are fatal: the run stops at the first
/// one and nothing is retried.
#[derive(Debug)]
pub enum AmpError {
    /// Missing, unreadable or unparsable config, or a missing credential.
    Config(String),
    /// A non-success response from the Apple Music API, or a transport failure.
    Remote {
        status: Option<u16>,
        message: String,
    },
    /// Reading or writing a file failed.
    Io(io::Error),
    /// A snapshot could not be encoded or decoded.
    Parse(serde_json::Error),
    /// The command line was incomplete; carries the usage text to print.
    Usage(String),
}

impl AmpError {
    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        AmpError::Remote {
            status,
            message: message.into(),
        }
    }

    /// Process exit status the top-level handler uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AmpError::Usage(_) => EXIT_USAGE,
            AmpError::Config(_) => EXIT_CONFIG,
            AmpError::Remote { .. } => EXIT_REMOTE,
            AmpError::Io(_) | AmpError::Parse(_) => EXIT_IO,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, AmpError::Usage(_))
    }
}

impl fmt::Display for AmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmpError::Config(msg) => write!(f, "config error: {}", msg),
            AmpError::Remote {
                status: Some(status),
                message,
            } => write!(f, "remote error ({}): {}", status, message),
            AmpError::Remote {
                status: None,
                message,
            } => write!(f, "remote error: {}", message),
            AmpError::Io(e) => write!(f, "i/o error: {}", e),
            AmpError::Parse(e) => write!(f, "json error: {}", e),
            AmpError::Usage(usage) => write!(f, "{}", usage),
        }
    }
}

impl std::error::Error for AmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AmpError::Io(e) => Some(e),
            AmpError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AmpError {
    fn from(err: io::Error) -> Self {
        AmpError::Io(err)
    }
}

impl From<serde_json::Error> for AmpError {
    fn from(err: serde_json::Error) -> Self {
        AmpError::Parse(err)
    }
}

impl From<reqwest::Error> for AmpError {
    fn from(err: reqwest::Error) -> Self {
        AmpError::Remote {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
