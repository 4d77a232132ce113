use crate::conf::types::{LocaleDeviceConfig, LocaleDeviceSpec};
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::builtin::locale::LocaleDevice;
use crate::device::core::{Device, DevicePipeline};
use crate::locale::Locale;
use http::header::HOST;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use std::sync::Arc;

pub(crate) const AVAILABLE: [&str; 5] = ["en", "en-US", "de", "de-DE", "es"];

pub(crate) fn locale(raw: &str) -> Locale {
    Locale::parse(raw).expect("invalid test locale")
}

/// Default device settings over the test catalog, adjusted by `f`.
pub(crate) fn config(f: impl FnOnce(&mut LocaleDeviceSpec)) -> LocaleDeviceConfig {
    let mut spec = LocaleDeviceSpec::new(AVAILABLE, "en");
    f(&mut spec);
    LocaleDeviceConfig::try_from(spec).expect("invalid test config")
}

/// Builds a hydrated GET request the way a browser sends it: the Host header
/// carries the URL authority.
pub(crate) fn request(url: &str, headers: &[(&str, &str)]) -> RequestCtx {
    let uri: Uri = url.parse().expect("invalid url");

    let mut map = HeaderMap::new();
    if let Some(authority) = uri.authority() {
        map.insert(HOST, HeaderValue::from_str(authority.as_str()).unwrap());
    }
    for (k, v) in headers {
        let name: HeaderName = k.parse().expect("invalid header name");
        let value: HeaderValue = v.parse().expect("invalid header value");
        map.append(name, value);
    }

    let mut ctx = RequestCtx::empty();
    ctx.hydrate(&Method::GET, &uri, &map);
    ctx
}

/// Runs a request through a single locale device and a downstream that
/// answers `200 Coolness`.
pub(crate) fn dispatch(
    cfg: &LocaleDeviceConfig,
    url: &str,
    headers: &[(&str, &str)],
) -> (RequestCtx, ResponseCtx) {
    let devices: Vec<Arc<dyn Device>> = vec![Arc::new(LocaleDevice::from_config(cfg.clone()))];
    let mut ctx = request(url, headers);

    let downstream =
        |_: &RequestCtx| ResponseCtx::new(StatusCode::OK, HeaderMap::new(), b"Coolness".to_vec());
    let resp = DevicePipeline::dispatch(&devices, &mut ctx, &downstream);

    (ctx, resp)
}

pub(crate) fn resolved(ctx: &RequestCtx) -> Locale {
    ctx.resolved_locale()
        .expect("no locale resolved")
        .locale()
        .clone()
}

pub(crate) fn location(resp: &ResponseCtx) -> Option<&str> {
    resp.header_str("location")
}
