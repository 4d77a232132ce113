use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::errors::DeviceError;
use crate::device::core::{Device, DevicePipeline, DeviceResult};
use http::{HeaderMap, StatusCode};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy)]
enum Behavior {
    Continue,
    Respond,
    Degrade,
    Fail,
}

struct Recorder {
    name: &'static str,
    on_request: Behavior,
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new(
        name: &'static str,
        on_request: Behavior,
        log: &Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn Device> {
        Arc::new(Self {
            name,
            on_request,
            log: Arc::clone(log),
        })
    }

    fn record(&self, event: &str) {
        self.log.lock().unwrap().push(format!("{}:{event}", self.name));
    }
}

impl Device for Recorder {
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        self.record("request");
        match self.on_request {
            Behavior::Continue => DeviceResult::Continue,
            Behavior::Respond => DeviceResult::Respond(ResponseCtx::new(
                StatusCode::FORBIDDEN,
                HeaderMap::new(),
                Vec::new(),
            )),
            Behavior::Degrade => DeviceResult::Error(DeviceError::degraded("degraded")),
            Behavior::Fail => DeviceResult::Error(DeviceError {
                message: "boom".to_string(),
                fatal: true,
            }),
        }
    }

    fn on_response(&self, _req: &RequestCtx, _resp: &mut ResponseCtx) -> DeviceResult {
        self.record("response");
        DeviceResult::Continue
    }

    fn on_error(&self, err: &DeviceError) {
        self.record(&format!("error({})", err.message));
    }
}

fn run(behaviors: &[Behavior]) -> (StatusCode, Vec<String>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let names = ["a", "b", "c"];
    let devices: Vec<Arc<dyn Device>> = behaviors
        .iter()
        .zip(names)
        .map(|(b, name)| Recorder::new(name, *b, &log))
        .collect();

    let handler_log = Arc::clone(&log);
    let handler = move |_: &RequestCtx| {
        handler_log.lock().unwrap().push("handler".to_string());
        ResponseCtx::new(StatusCode::OK, HeaderMap::new(), Vec::new())
    };

    let mut ctx = RequestCtx::empty();
    let resp = DevicePipeline::dispatch(&devices, &mut ctx, &handler);

    let events = log.lock().unwrap().clone();
    (resp.status, events)
}

#[test]
fn every_phase_runs_in_order() {
    // Act
    let (status, events) = run(&[Behavior::Continue, Behavior::Continue]);

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        events,
        vec!["a:request", "b:request", "handler", "a:response", "b:response"]
    );
}

#[test]
fn respond_short_circuits_the_request() {
    let (status, events) = run(&[Behavior::Respond, Behavior::Continue]);

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(events, vec!["a:request"]);
}

#[test]
fn degraded_device_does_not_stop_the_pipeline() {
    let (status, events) = run(&[Behavior::Degrade, Behavior::Continue]);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        events,
        vec![
            "a:request",
            "a:error(degraded)",
            "b:request",
            "handler",
            "a:response",
            "b:response"
        ]
    );
}

#[test]
fn fatal_error_ends_with_internal_error() {
    let (status, events) = run(&[Behavior::Continue, Behavior::Fail, Behavior::Continue]);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(events, vec!["a:request", "b:request", "b:error(boom)"]);
}
