use crate::error::Result;

pub use http::Http;
pub use memory::{Memory, Request, Response};

mod http;
mod memory;

pub const SERVER_VERSION_PATH: &str = "/api/server/version";
pub const WEBSERVICES_PATH: &str = "/api/webservices/list";
pub const INCLUDE_INTERNALS_QUERY: &str = "?include_internals=true";

/// A [Transport] fetches raw response bodies for the loader.
///
/// Implementations classify failures into [crate::Error::Unauthorized] for a `401`,
/// [crate::Error::ServerError] for any other non-`200` status and [crate::Error::Transport] when
/// no response was received at all.
pub trait Transport {
    /// Issue a GET to `url`, optionally with an `Authorization` header, and return the body of a
    /// `200` response.
    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Vec<u8>> {
        (**self).get(url, authorization)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Vec<u8>> {
        (**self).get(url, authorization)
    }
}

pub fn version_url(host: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), SERVER_VERSION_PATH)
}

pub fn catalog_url(host: &str, include_internals: bool) -> String {
    let mut url = format!("{}{}", host.trim_end_matches('/'), WEBSERVICES_PATH);
    if include_internals {
        url.push_str(INCLUDE_INTERNALS_QUERY);
    }
    url
}

#[cfg(test)]
mod tests {
    use crate::transport::{catalog_url, version_url};

    #[test]
    fn urls() {
        assert_eq!(
            version_url("http://localhost:9000"),
            "http://localhost:9000/api/server/version"
        );
        assert_eq!(
            catalog_url("http://localhost:9000", false),
            "http://localhost:9000/api/webservices/list"
        );
        assert_eq!(
            catalog_url("http://localhost:9000/", true),
            "http://localhost:9000/api/webservices/list?include_internals=true"
        );
    }
}
