//! Integration tests for the logger
//!
//! These tests verify:
//! - Console routing and the line layout
//! - File truncation between runs
//! - Non-interleaved lines under concurrent logging
//! - Silence while disabled
//! - Caller capture through the macros

use parking_lot::Mutex;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use twinlog::{error, exception, information, information_value, warning};
use twinlog::{CallSite, ConsoleAppender, Fault, Logger};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("console output is UTF-8")
    }

    fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logger_in(dir: &TempDir) -> (Logger, Capture, Capture) {
    let out = Capture::default();
    let err = Capture::default();
    let logger = Logger::builder()
        .file(dir.path().join("twinlog.log"))
        .console(ConsoleAppender::with_writers(out.clone(), err.clone()))
        .build();
    (logger, out, err)
}

fn file_lines(dir: &TempDir) -> Vec<String> {
    fs::read_to_string(dir.path().join("twinlog.log"))
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split `<timestamp> [<thread>] [<tag>] <label> : <body>` into its fields
fn parse_line(line: &str) -> Option<(&str, &str, &str, &str, &str)> {
    let (timestamp, rest) = line.split_once(" [")?;
    let (thread, rest) = rest.split_once("] [")?;
    let (tag, rest) = rest.split_once("] ")?;
    let (label, body) = rest.split_once(" : ")?;
    Some((timestamp, thread, tag, label, body))
}

fn is_sortable_timestamp(text: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
}

struct Widget {
    logger: Arc<Logger>,
}

impl Widget {
    #[allow(non_snake_case)]
    fn Save(&self) {
        warning!(self.logger, "x");
    }
}

#[test]
fn test_line_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, out, _) = logger_in(&dir);

    logger.information(CallSite::new("src/Widget.rs", "Save"), "saved 3 rows");

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    let (timestamp, thread, tag, label, body) = parse_line(&lines[0]).expect("well-formed line");
    assert!(is_sortable_timestamp(timestamp), "timestamp was {}", timestamp);
    assert!(thread.parse::<u64>().is_ok(), "thread was {}", thread);
    assert_eq!(tag, "Inf");
    assert_eq!(label, "Widget.Save()");
    assert_eq!(body, "saved 3 rows");
}

#[test]
fn test_each_level_writes_one_line_to_its_stream() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, out, err) = logger_in(&dir);

    information!(logger, "i");
    assert_eq!((out.lines().len(), err.lines().len()), (1, 0));
    warning!(logger, "w");
    assert_eq!((out.lines().len(), err.lines().len()), (2, 0));
    error!(logger, "e");
    assert_eq!((out.lines().len(), err.lines().len()), (2, 1));

    assert!(out.lines()[0].contains("[Inf]"));
    assert!(out.lines()[1].contains("[Wrn]"));
    assert!(err.lines()[0].contains("[Err]"));
    assert_eq!(file_lines(&dir).len(), 3);
}

#[test]
fn test_caller_label_from_method() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out = Capture::default();
    let logger = Arc::new(
        Logger::builder()
            .file(dir.path().join("twinlog.log"))
            .console(ConsoleAppender::with_writers(out.clone(), io::sink()))
            .build(),
    );

    Widget { logger }.Save();

    let lines = out.lines();
    let (_, _, tag, label, body) = parse_line(&lines[0]).expect("well-formed line");
    assert_eq!(tag, "Wrn");
    assert_eq!(label, "integration_tests.Save()");
    assert_eq!(body, "x");
}

#[test]
fn test_disabled_logger_is_silent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, out, err) = logger_in(&dir);
    logger.set_enabled(false);

    information!(logger);
    information!(logger, "a");
    information_value!(logger, &vec![1, 2, 3]);
    warning!(logger, "b");
    error!(logger, "c");
    exception!(logger, &Fault::new("E", "d"));

    assert!(out.text().is_empty());
    assert!(err.text().is_empty());
    assert!(!dir.path().join("twinlog.log").exists());
}

#[test]
fn test_exception_with_root_cause() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, _, err) = logger_in(&dir);

    let io = io::Error::new(io::ErrorKind::PermissionDenied, "/etc/app.toml");
    let wrapped = Fault::new("LoadError", "reading settings")
        .with_cause(Fault::new("ConfigError", "cannot open config").with_cause(io));
    exception!(logger, &wrapped);

    let text = err.text();
    assert!(text.contains("[Err] integration_tests.test_exception_with_root_cause() : LoadError: reading settings"));
    assert!(text.contains("PermissionDenied"));
    assert!(!text.contains("cannot open config"));
    assert_eq!(text, file_lines(&dir).join("\n") + "\n");
}

#[test]
fn test_exception_without_cause_is_single_description() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, _, err) = logger_in(&dir);

    exception!(logger, &Fault::new("Timeout", "no reply after 5s"));

    let text = err.text();
    assert_eq!(text.matches("Timeout: no reply after 5s").count(), 1);
}

#[test]
fn test_value_dump_is_body() {
    #[derive(serde::Serialize)]
    struct Stats {
        name: &'static str,
        count: u32,
    }

    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, out, _) = logger_in(&dir);

    information_value!(logger, &Stats { name: "a", count: 1 });

    let expected_body = "{\n  \"name\": \"a\",\n  \"count\": 1\n}";
    assert!(out.text().ends_with(&format!(" : {}\n", expected_body)));
    assert_eq!(file_lines(&dir).join("\n"), out.text().trim_end_matches('\n'));
}

#[test]
fn test_second_run_truncates_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let (first, _, _) = logger_in(&dir);
        information!(first, "first run");
        error!(first, "first run failure");
    }
    assert_eq!(file_lines(&dir).len(), 2);

    let (second, _, _) = logger_in(&dir);
    information!(second, "second run");

    let lines = file_lines(&dir);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(": second run"));
}

#[test]
fn test_concurrent_errors_do_not_interleave() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 25;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, _, err) = logger_in(&dir);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    error!(logger, "msg-{}-{}", t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = file_lines(&dir);
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = std::collections::HashSet::new();
    for line in &lines {
        let (timestamp, thread, tag, label, body) =
            parse_line(line).unwrap_or_else(|| panic!("malformed line: {}", line));
        assert!(is_sortable_timestamp(timestamp));
        assert!(thread.parse::<u64>().is_ok());
        assert_eq!(tag, "Err");
        assert!(label.starts_with("integration_tests."));
        assert!(body.starts_with("msg-"), "mixed line: {}", line);
        assert_eq!(body.matches("msg-").count(), 1, "mixed line: {}", line);
        assert!(seen.insert(body.to_string()), "duplicate line: {}", line);
    }

    // Console order matches file order: both are written under the same lock
    assert_eq!(err.lines(), lines);
    assert_eq!(logger.metrics().emitted(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_unwritable_file_is_silent_degradation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out = Capture::default();
    let err = Capture::default();
    let logger = Logger::builder()
        .file(dir.path().join("missing").join("twinlog.log"))
        .console(ConsoleAppender::with_writers(out.clone(), err.clone()))
        .build();

    information!(logger, "one");
    error!(logger, "two");

    assert_eq!(out.lines().len(), 1);
    assert_eq!(err.lines().len(), 1);
    assert_eq!(logger.metrics().file_failures(), 2);
}
