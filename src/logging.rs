//! Routes `tracing` events to the browser console.

use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Sink = fn(Level, &str);

pub struct ConsoleLayer {
    max_level: Level,
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level, sink: console_sink }
    }

    #[cfg(test)]
    pub fn with_sink(max_level: Level, sink: Sink) -> Self {
        Self { max_level, sink }
    }
}

fn console_sink(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

pub fn format_event(event: &Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    format!("{} {}: {}{}", meta.level(), meta.target(), visitor.message, visitor.fields)
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level > self.max_level {
            return;
        }
        (self.sink)(level, &format_event(event));
    }
}

pub fn init(max_level: Level) {
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(max_level));
    // A second init (hot reload) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|l| l.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn formats_message_and_fields_and_filters_by_level() {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::with_sink(Level::INFO, capture));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(index = 2, name = "Grand Hotel", "removed saved place");
            tracing::debug!("too chatty");
            tracing::warn!("storage unavailable");
        });
        let lines = LINES.with(|l| l.borrow().clone());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::INFO);
        assert!(lines[0].1.starts_with("INFO "));
        assert!(lines[0].1.contains("removed saved place index=2 name=Grand Hotel"));
        assert_eq!(lines[1].0, Level::WARN);
    }
}
