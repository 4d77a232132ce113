use http::header::LOCATION;
use http::{HeaderMap, HeaderValue, StatusCode};

#[derive(Debug)]
pub struct ResponseCtx {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseCtx {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn moved_permanently(location: HeaderValue) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, location);
        Self::new(
            StatusCode::MOVED_PERMANENTLY,
            headers,
            b"Redirecting".to_vec(),
        )
    }

    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            b"Internal Server Error".to_vec(),
        )
    }

    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
