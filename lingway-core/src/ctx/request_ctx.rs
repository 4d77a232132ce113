use crate::ctx::ResolvedLocale;
use http::header::{HOST, InvalidHeaderValue};
use http::{Extensions, HeaderMap, HeaderValue, Method, Uri};

/// Mutable per-request representation read and rewritten by devices.
///
/// Built once per request by the host server via [`RequestCtx::hydrate`] and
/// dropped after the response is produced. Nothing in here outlives the
/// request.
#[derive(Debug)]
pub struct RequestCtx {
    /// Lifecycle flag to determine if the context has already been hydrated.
    hydrated: bool,

    method: Method,

    /// Lowercase scheme, `http` unless the request target says otherwise.
    scheme: String,

    /// Host name without port, mirrors the Host header when one is present.
    server_name: String,

    server_port: u16,

    path: String,

    /// Raw query string without the leading `?`.
    query: String,

    headers: HeaderMap,

    /// Request-scoped typed extensions (NOT forwarded, NOT logged by default).
    pub extensions: Extensions,
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::empty()
    }
}

/// Hydration API
impl RequestCtx {
    pub fn empty() -> Self {
        Self {
            hydrated: false,
            method: Method::GET,
            scheme: "http".to_string(),
            server_name: "localhost".to_string(),
            server_port: 80,
            path: "/".to_string(),
            query: String::new(),
            headers: HeaderMap::new(),
            extensions: Extensions::new(),
        }
    }

    /// Create a boundary between the host server's request type and device logic.
    ///
    /// Server name and port come from the request target's authority, then
    /// from the Host header, then fall back to `localhost`.
    pub fn hydrate(&mut self, method: &Method, uri: &Uri, headers: &HeaderMap) {
        debug_assert!(!self.hydrated, "Already hydrated, cannot hydrate again");

        self.method = method.clone();
        self.scheme = uri
            .scheme_str()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "http".to_string());

        let default_port = default_port(&self.scheme);
        let host_header = headers.get(HOST).and_then(|v| v.to_str().ok());

        let (server_name, port) = match (uri.authority(), host_header) {
            (Some(authority), _) => (authority.host().to_string(), authority.port_u16()),
            (None, Some(host)) => {
                let (name, port) = split_host_port(host);
                (name.to_string(), port)
            }
            (None, None) => ("localhost".to_string(), None),
        };

        self.server_name = server_name;
        self.server_port = port.unwrap_or(default_port);

        self.path = match uri.path() {
            "" => "/".to_string(),
            p => p.to_string(),
        };
        self.query = uri.query().unwrap_or_default().to_string();
        self.headers = headers.clone();

        self.hydrated = true;
    }
}

/// Method / Scheme API
impl RequestCtx {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

/// Request Header API
impl RequestCtx {
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// All values of a header joined with `sep`, skipping non-UTF-8 values.
    pub fn joined_header(&self, name: &str, sep: &str) -> Option<String> {
        let mut values = self
            .headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .peekable();

        values.peek()?;
        Some(values.collect::<Vec<_>>().join(sep))
    }
}

/// Request Host API
impl RequestCtx {
    /// The Host header, if present and valid UTF-8.
    pub fn host(&self) -> Option<&str> {
        self.headers.get(HOST).and_then(|v| v.to_str().ok())
    }

    pub fn set_host(&mut self, host: &str) -> Result<(), InvalidHeaderValue> {
        let value = HeaderValue::from_str(host)?;
        self.headers.insert(HOST, value);
        Ok(())
    }

    /// Synthesizes `server-name:server-port` as the Host header when it is missing.
    pub fn ensure_host(&mut self) {
        if self.headers.contains_key(HOST) {
            return;
        }

        let synthesized = format!("{}:{}", self.server_name, self.server_port);
        if let Err(err) = self.set_host(&synthesized) {
            tracing::debug!(host = %synthesized, error = %err, "cannot synthesize host header");
        }
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn set_server_name(&mut self, server_name: impl Into<String>) {
        self.server_name = server_name.into();
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Host and port as they appear in the request URL.
    ///
    /// The Host header wins over server-name/server-port. The scheme's default
    /// port is omitted.
    pub fn authority(&self) -> String {
        let (name, port) = match self.host() {
            Some(host) => split_host_port(host),
            None => (self.server_name.as_str(), Some(self.server_port)),
        };

        match port {
            Some(port) if port != default_port(&self.scheme) => format!("{name}:{port}"),
            _ => name.to_string(),
        }
    }
}

/// Request Path / Query API
impl RequestCtx {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Removes a single trailing `/` that follows a non-`/` character.
    ///
    /// `/` and paths ending in `//` are left alone.
    pub fn trim_trailing_slash(&mut self) {
        let trailing = matches!(self.path.as_bytes(), [.., prev, b'/'] if *prev != b'/');
        if trailing {
            self.path.pop();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Full request URL rebuilt from the current (possibly rewritten) state.
    pub fn url(&self) -> String {
        let mut url = format!("{}://{}{}", self.scheme, self.authority(), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        url
    }
}

/// Locale API
impl RequestCtx {
    /// Locale resolved for this request, if a locale device ran.
    pub fn resolved_locale(&self) -> Option<&ResolvedLocale> {
        self.extensions.get::<ResolvedLocale>()
    }
}

fn default_port(scheme: &str) -> u16 {
    match scheme {
        "https" => 443,
        _ => 80,
    }
}

/// Splits `host[:port]`, keeping bracketed IPv6 literals intact.
pub(crate) fn split_host_port(host: &str) -> (&str, Option<u16>) {
    let host = host.trim();

    let port_sep = match host.rfind(':') {
        Some(i) if !host[i..].contains(']') => i,
        _ => return (host, None),
    };

    match host[port_sep + 1..].parse::<u16>() {
        Ok(port) => (&host[..port_sep], Some(port)),
        Err(_) => (host, None),
    }
}
