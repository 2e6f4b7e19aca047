//! In-memory event capture for logging assertions in tests.
//!
//! The capture layer flattens every event into string fields keyed by name,
//! so assertions compare against the rendered value (`"17"`, `"ERR_IO"`).

use schevo_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One captured event.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, mut fields: HashMap<String, String>) -> Self {
        let component = fields.remove(FIELD_COMPONENT);
        let op = fields.get(FIELD_OP).cloned();
        let event = fields.get(FIELD_EVENT).cloned();
        Self {
            level,
            component,
            op,
            event,
            fields,
        }
    }

    /// Rendered value of a field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

struct Flatten<'a>(&'a mut HashMap<String, String>);

impl Visit for Flatten<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

/// Layer that appends every event to a shared buffer.
pub struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut Flatten(&mut fields));
        let captured = CapturedEvent::from_fields(*event.metadata().level(), fields);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(captured);
        }
    }
}

/// Read handle on the capture buffer.
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// A layer and a handle on its buffer, for tests that install their own
    /// subscriber.
    pub fn layer() -> (CaptureLayer, Self) {
        let buffer = Buffer::default();
        (
            CaptureLayer {
                buffer: buffer.clone(),
            },
            Self { buffer },
        )
    }

    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    /// Events of one operation with the given `event` value
    pub fn events_for(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if no event of `op` with the given `event` value was captured.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no {}/{} event among {} captured",
            op,
            event,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber, once per process.
///
/// All tests in one binary share the buffer, so assert on operation names
/// only that test produces, or on facts that hold for every run.
///
/// ```
/// use schevo_core::logging_facility::test_capture::init_test_capture;
/// use schevo_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCapture::layer();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
