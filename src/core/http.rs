//! HTTP utilities for Sleeper API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::Result;

/// Headers sent with every Sleeper request.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers().unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        let agent = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(agent.starts_with("sleeper-ffl/"));
    }
}
