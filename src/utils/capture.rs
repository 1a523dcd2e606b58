// ============================================================================
// Event Capture (tests only)
// Records tracing events emitted while a closure runs
// ============================================================================

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// One captured event: its level and its fields rendered with `Debug`.
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Rendered value of the named field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{:?}", value)));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

/// Run `f` with a thread-local subscriber and return every event it emitted.
pub(crate) fn capture_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, f);

    let captured = events.lock().clone();
    captured
}
