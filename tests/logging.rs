//! Tracing events emitted by value derivation.

use std::io;
use std::sync::{Arc, Mutex};

use cardval::{Card, derive_value};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that records every event at `TRACE` and above.
fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn unrecognized_rank_logs_fallback() {
    let output = capture(|| {
        assert_eq!(derive_value(Some("Zero")), 0);
    });
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("rank not recognized, value falls back to 0"), "{output}");
    assert!(output.contains("unrecognized rank `Zero`"), "{output}");
}

#[test]
fn recognized_and_absent_ranks_are_silent() {
    let output = capture(|| {
        assert_eq!(derive_value(Some("queen")), 12);
        assert_eq!(derive_value(None), 0);
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn set_rank_logs_overwritten_value() {
    let mut card = Card::with_value("Clubs", "2", 42);
    let output = capture(|| card.set_rank("King"));
    assert_eq!(card.value(), 13);
    assert!(output.contains("TRACE"), "{output}");
    assert!(output.contains("rank change re-derived value"), "{output}");
    assert!(output.contains("old=42"), "{output}");
    assert!(output.contains("new=13"), "{output}");
}

#[test]
fn set_rank_with_unchanged_value_is_silent() {
    let mut card = Card::new("Clubs", "King");
    let output = capture(|| card.set_rank("KING"));
    assert!(output.is_empty(), "{output}");
}
