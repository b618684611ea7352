use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Blocking HTTP [Transport]. No retries are attempted.
#[derive(Debug, Clone, Default)]
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Every request fails with [Error::Transport] if it takes longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self::new(Client::builder().timeout(timeout).build()?))
    }
}

impl Transport for Http {
    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }
        let transport_error = |source: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source,
        };
        let response = request.send().map_err(transport_error)?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => {
                return Err(Error::Unauthorized {
                    url: url.to_string(),
                })
            }
            status => {
                return Err(Error::ServerError {
                    url: url.to_string(),
                    status: status.as_u16(),
                })
            }
        }
        Ok(response.bytes().map_err(transport_error)?.to_vec())
    }
}
