//! Log capture shared by the unit tests.
//!
//! Records are kept per thread, so a `#[tokio::test]` (current-thread
//! runtime) only sees what its own test logged.

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::cell::RefCell;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs the capturing logger once and clears this thread's records.
pub(crate) fn capture_logs() {
    INSTALLED.get_or_init(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub(crate) fn captured_logs() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}
