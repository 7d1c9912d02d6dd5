use chrono::Utc;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Sink {
    /// JSONL to stdout, errors to stderr.
    Stdio,
    /// Entries append to a shared buffer so tests can assert on them.
    Capture(Rc<RefCell<String>>),
    /// Entries are dropped; for library callers that own the output stream.
    Discard,
}

#[derive(Clone, Debug)]
pub struct Logger {
    rid: u64,
    sink: Sink,
}

impl Logger {
    /// Creates a new `Logger`.
    ///
    /// # Panics
    ///
    /// Panics if `rid` is zero.
    #[must_use]
    pub fn new(rid: u64) -> Self {
        assert!(rid > 0, "Logger rid must be non-zero");
        Self { rid, sink: Sink::Stdio }
    }

    /// Logger that appends entries to `buffer` instead of the process
    /// streams, so tests can assert on emitted actions.
    #[must_use]
    pub fn new_for_test(rid: u64, buffer: Rc<RefCell<String>>) -> Self {
        assert!(rid > 0, "Logger rid must be non-zero");
        Self { rid, sink: Sink::Capture(buffer) }
    }

    /// Logger that discards everything. Used by the library-level merge
    /// wrapper, which must not write to the caller's stdout.
    #[must_use]
    pub fn silent() -> Self {
        Self { rid: 1, sink: Sink::Discard }
    }

    /// Logs a structured info message to stdout.
    pub fn info(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("info", subsystem, action, message);
    }

    /// Logs a structured error message to stderr.
    pub fn error(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("error", subsystem, action, message);
    }

    fn emit(&self, level: &str, subsystem: &str, action: &str, message: &str) {
        let log_entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "level": level,
            "rid": self.rid,
            "subsystem": subsystem,
            "action": action,
            "msg": message,
        });

        match &self.sink {
            Sink::Capture(buffer) => {
                buffer.borrow_mut().push_str(&log_entry.to_string());
                buffer.borrow_mut().push('\n');
            }
            Sink::Discard => {}
            // JSONL: one entry per line, errors to the error stream.
            Sink::Stdio => {
                if level == "error" {
                    eprintln!("{log_entry}");
                } else {
                    println!("{log_entry}");
                }
            }
        }
    }
}
