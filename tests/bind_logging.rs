//! Purpose: Check the binder's `tracing` events as a subscriber sees them.
//! Exports: Integration tests only (no runtime exports).
//! Role: Lock the event names and fields that log pipelines filter on.
//! Invariants: Successes log at `trace`, failures at `debug`; nothing louder.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use scalarbind::api::bind;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(max_level: Level, body: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(max_level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    captured.text()
}

#[test]
fn successes_and_failures_emit_events() {
    let logs = capture(Level::TRACE, || {
        let mut slot: u32 = 0;
        bind("12", &mut slot).unwrap();
        assert!(bind("-12", &mut slot).is_err());
    });
    assert!(logs.contains("bound scalar"), "{logs}");
    assert!(logs.contains("bind failed"), "{logs}");
    assert!(logs.contains("error_kind=Range"), "{logs}");
    assert!(logs.contains("type_name=\"u32\""), "{logs}");
}

#[test]
fn default_levels_stay_quiet() {
    let logs = capture(Level::INFO, || {
        let mut slot = false;
        bind("T", &mut slot).unwrap();
        assert!(bind("yes", &mut slot).is_err());
    });
    assert!(logs.is_empty(), "{logs}");
}
