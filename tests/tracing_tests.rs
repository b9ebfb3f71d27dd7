#![cfg(feature = "objects")]
//! Diagnostic events emitted by pipelines and the path accessor.

use std::io::Write;
use std::sync::{Arc, Mutex};

use pointfree::prelude::*;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct CapturedLines(Arc<Mutex<Vec<u8>>>);

impl CapturedLines {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLines {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn captured<T>(body: impl FnOnce() -> T) -> (T, String) {
    let lines = CapturedLines::default();
    let writer = lines.clone();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("pointfree=trace"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, lines.contents())
}

#[test]
fn test_pipeline_stages_are_traced() {
    let (result, output) = captured(|| {
        pipe!(4, numbers::add().bind([Value::from(1)]), numbers::negate())
    });
    assert_eq!(result.unwrap(), Value::from(-5));
    assert!(output.contains("applying stage"));
}

#[test]
fn test_absent_stage_is_traced() {
    let (result, output) = captured(|| pipe!(Value::empty_record(), objects::get("missing"), strings::to_string()));
    assert_eq!(result.unwrap(), Value::Absent);
    assert!(output.contains("stage produced absent"));
}

#[test]
fn test_auto_vivified_keys_are_traced() {
    let (result, output) = captured(|| call(&objects::update("a.b", 1), Value::empty_record()));
    assert_eq!(
        result.unwrap(),
        Value::record([("a", Value::record([("b", 1)]))])
    );
    assert!(output.contains("creating missing key"));
}
