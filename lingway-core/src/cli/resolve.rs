use crate::cli::OutputMode;
use crate::conf::load_devices;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::{DevicePipeline, DeviceRegistry};
use anyhow::{Context, anyhow, bail};
use clap::Args;
use http::header::{HOST, LOCATION, SET_COOKIE};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the device file
    #[arg(short, long, default_value = "config/devices.hcl")]
    pub config: PathBuf,

    /// Absolute request URL, e.g. http://de.example.com/docs?locale=es
    pub url: String,

    /// Request header as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

/// What a single simulated request turned into.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub locale: Option<String>,
    pub source: Option<&'static str>,
    pub bypassed: bool,
    pub status: u16,
    pub location: Option<String>,
    pub set_cookie: Vec<String>,
    /// URL of the request as the downstream handler saw it.
    pub url: String,
}

/// Runs one request through the configured devices against a stub handler.
pub fn run(args: ResolveArgs, mode: OutputMode) -> anyhow::Result<()> {
    let devices = load_devices(&args.config)?;
    let mut registry = DeviceRegistry::new();
    registry.load_from_config(devices);

    let uri: Uri = args
        .url
        .parse()
        .with_context(|| format!("invalid url '{}'", args.url))?;
    let Some(authority) = uri.authority() else {
        bail!("url '{}' must be absolute", args.url);
    };

    let mut headers = parse_headers(&args.headers)?;
    if !headers.contains_key(HOST) {
        headers.insert(HOST, HeaderValue::from_str(authority.as_str())?);
    }

    let mut ctx = RequestCtx::empty();
    ctx.hydrate(&Method::GET, &uri, &headers);

    let handler =
        |_: &RequestCtx| ResponseCtx::new(StatusCode::OK, HeaderMap::new(), b"OK".to_vec());
    let resp = DevicePipeline::dispatch(registry.all(), &mut ctx, &handler);

    let report = build_report(&ctx, &resp);
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputMode::Plain => render_plain(&report),
        OutputMode::Pretty => render_pretty(&report),
    }

    Ok(())
}

pub(crate) fn parse_headers(raw: &[String]) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for header in raw {
        let (name, value) = header
            .split_once(':')
            .ok_or_else(|| anyhow!("header '{header}' must look like 'Name: value'"))?;
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .with_context(|| format!("invalid header name in '{header}'"))?;
        let value = HeaderValue::from_str(value.trim())
            .with_context(|| format!("invalid header value in '{header}'"))?;
        headers.append(name, value);
    }
    Ok(headers)
}

pub fn build_report(ctx: &RequestCtx, resp: &ResponseCtx) -> ResolveReport {
    let resolved = ctx.resolved_locale();

    ResolveReport {
        locale: resolved.map(|r| r.locale().to_string()),
        source: resolved.and_then(|r| r.source()).map(|s| s.as_str()),
        bypassed: resolved.is_some_and(|r| r.is_bypassed()),
        status: resp.status.as_u16(),
        location: resp.header_str(LOCATION.as_str()).map(str::to_string),
        set_cookie: resp
            .headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect(),
        url: ctx.url(),
    }
}

fn render_plain(report: &ResolveReport) {
    println!("locale: {}", report.locale.as_deref().unwrap_or("-"));
    println!("source: {}", report.source.unwrap_or("default"));
    if report.bypassed {
        println!("bypassed: true");
    }
    println!("status: {}", report.status);
    if let Some(location) = &report.location {
        println!("location: {location}");
    }
    for cookie in &report.set_cookie {
        println!("set-cookie: {cookie}");
    }
    println!("url: {}", report.url);
}

fn render_pretty(report: &ResolveReport) {
    let locale = report.locale.as_deref().unwrap_or("-");
    let source = report.source.unwrap_or("default");

    println!("{} {} (from {})", "locale".bold(), locale.green(), source.cyan());
    if report.bypassed {
        println!("{} path excluded from locale handling", "note".yellow());
    }

    match &report.location {
        Some(location) => println!(
            "{} {} → {}",
            "redirect".bold(),
            report.status.to_string().yellow(),
            location.underline()
        ),
        None => println!(
            "{} {} {}",
            "downstream".bold(),
            report.status.to_string().green(),
            report.url.dimmed()
        ),
    }

    for cookie in &report.set_cookie {
        println!("{} {}", "set-cookie".bold(), cookie);
    }
}
