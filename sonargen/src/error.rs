use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed version '{input}'. Each segment must be an integer in 0..=255.")]
    MalformedVersion {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Authorization failed for '{url}'.")]
    Unauthorized { url: String },

    #[error("Got error response from '{url}', status code {status}.")]
    ServerError { url: String, status: u16 },

    #[error("Failed to reach '{url}'.")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode API catalog.")]
    MalformedCatalog(#[source] serde_json::Error),

    #[error("Failed to resolve target version.")]
    VersionResolutionFailed(#[source] Box<Error>),

    #[error("Failed to load API definition.")]
    DefinitionLoadFailed(#[source] Box<Error>),
}

impl Error {
    /// True for failures reported by the transport layer, regardless of stage wrapping.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Unauthorized { .. } | Error::ServerError { .. } | Error::Transport { .. } => {
                true
            }
            Error::VersionResolutionFailed(inner) | Error::DefinitionLoadFailed(inner) => {
                inner.is_transport()
            }
            _ => false,
        }
    }

    /// Innermost error, with stage wrappers removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::VersionResolutionFailed(inner) | Error::DefinitionLoadFailed(inner) => {
                inner.root()
            }
            other => other,
        }
    }
}
