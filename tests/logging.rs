use std::sync::Mutex;

use likho::{interpreter::evaluator::core::RunOptions, run_program};
use log::{LevelFilter, Log, Metadata, Record};

struct Recorder {
    messages: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder { messages: Mutex::new(Vec::new()) };

#[test]
fn each_stage_is_logged_once() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    run_program("maano x = 2\nlikho x", &RunOptions::default());

    let messages = RECORDER.messages.lock().unwrap();
    let count = |prefix: &str| messages.iter().filter(|m| m.starts_with(prefix)).count();

    assert_eq!(count("lexing "), 1);
    assert_eq!(count("parsing "), 1);
    assert_eq!(count("lint produced "), 1);
}
