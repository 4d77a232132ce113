use http::header::{HOST, LOCATION, SET_COOKIE};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use lingway_core::conf::load_devices;
use lingway_core::ctx::{RequestCtx, ResponseCtx};
use lingway_core::device::core::{DevicePipeline, DeviceRegistry};
use std::path::PathBuf;

/// Header the stub application uses to echo the locale it was handed.
pub const LOCALE_ECHO: &str = "x-locale";
/// Header the stub application uses to echo the URL it was handed.
pub const URL_ECHO: &str = "x-url";

/// A device pipeline built from a fixture file, in front of a stub application.
pub struct TestGateway {
    registry: DeviceRegistry,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION.as_str())
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.header(SET_COOKIE.as_str())
    }

    /// Locale the application observed; `None` when the request never reached it.
    pub fn locale(&self) -> Option<&str> {
        self.header(LOCALE_ECHO)
    }

    pub fn seen_url(&self) -> Option<&str> {
        self.header(URL_ECHO)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestGateway {
    pub fn from_fixture(file: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(file);

        let devices = load_devices(&path)
            .unwrap_or_else(|e| panic!("failed to load fixture {}: {e}", path.display()));

        let mut registry = DeviceRegistry::new();
        registry.load_from_config(devices);

        Self { registry }
    }

    pub fn get(&self, url: &str) -> TestResponse {
        self.request(url, &[])
    }

    /// Sends an absolute-form GET whose Host header mirrors the URL authority.
    pub fn request(&self, url: &str, headers: &[(&str, &str)]) -> TestResponse {
        let uri: Uri = url.parse().expect("invalid url");

        let mut map = HeaderMap::new();
        if let Some(authority) = uri.authority() {
            map.insert(HOST, HeaderValue::from_str(authority.as_str()).unwrap());
        }
        for (name, value) in headers {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }

        let mut ctx = RequestCtx::empty();
        ctx.hydrate(&Method::GET, &uri, &map);

        let resp = DevicePipeline::dispatch(self.registry.all(), &mut ctx, &application);

        TestResponse {
            status: resp.status,
            headers: resp.headers,
            body: String::from_utf8_lossy(&resp.body).into_owned(),
        }
    }
}

fn application(ctx: &RequestCtx) -> ResponseCtx {
    let mut headers = HeaderMap::new();

    if let Some(resolved) = ctx.resolved_locale() {
        headers.insert(
            LOCALE_ECHO,
            HeaderValue::from_str(resolved.locale().as_str()).unwrap(),
        );
    }
    headers.insert(URL_ECHO, HeaderValue::from_str(&ctx.url()).unwrap());

    ResponseCtx::new(StatusCode::OK, headers, b"Coolness".to_vec())
}
