use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Canned response for a URL served by [Memory].
#[derive(Debug, Clone)]
pub enum Response {
    Body(Vec<u8>),
    Status(u16),
}

/// A request received by [Memory].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    pub url: String,
    pub authorization: Option<String>,
}

/// [Transport] serving canned responses keyed by full URL. Unknown URLs respond with `404`.
///
/// Useful for loading a catalog that was saved to disk, and for tests.
#[derive(Debug, Default)]
pub struct Memory {
    responses: HashMap<String, Response>,
    requests: RefCell<Vec<Request>>,
}

impl Memory {
    pub fn with_body(mut self, url: impl ToString, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(url.to_string(), Response::Body(body.into()));
        self
    }

    /// A `200` status serves an empty body. Any other status fails the way
    /// [crate::transport::Http] would.
    pub fn with_status(mut self, url: impl ToString, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Response::Status(status));
        self
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Transport for Memory {
    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(Request {
            url: url.to_string(),
            authorization: authorization.map(str::to_string),
        });
        match self.responses.get(url) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Status(200)) => Ok(vec![]),
            Some(Response::Status(401)) => Err(Error::Unauthorized {
                url: url.to_string(),
            }),
            Some(Response::Status(status)) => Err(Error::ServerError {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(Error::ServerError {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
