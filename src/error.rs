use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Why a report run stopped.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Listing endpoint answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// DNS, connect or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            Self::Request { .. } | Self::Transport(_) => "fetch",
            Self::Decode(_) => "decode",
            Self::Io { .. } => "persist",
        }
    }

    /// Error message followed by each underlying cause, one per line.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut cause = self.source();
        while let Some(c) = cause {
            out.push_str("\n    caused by: ");
            out.push_str(&c.to_string());
            cause = c.source();
        }
        out
    }
}
