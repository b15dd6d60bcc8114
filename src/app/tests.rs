// super imports
use super::*;

// std imports
use std::time::Duration;

// local imports
use crate::suite::{Case, Engine, Failure, Group, GroupReport, Timing};

fn options(suite: Suite) -> Options {
    Options {
        suite,
        timing: false,
        verbose: false,
    }
}

fn failing_report() -> Report {
    let case = Case {
        text: "abc",
        pattern: "a?d",
        expected: true,
    };
    Report {
        groups: vec![
            GroupReport {
                group: Group::Tame,
                checked: 2,
                skipped: 0,
                failures: vec![Failure {
                    engine: Engine::Cursor,
                    case,
                    actual: false,
                }],
            },
            GroupReport {
                group: Group::Empty,
                checked: 2,
                skipped: 0,
                failures: Vec::new(),
            },
        ],
        timings: vec![Timing {
            engine: Engine::Cursor,
            elapsed: Duration::from_millis(3),
        }],
    }
}

#[test]
fn test_run_passes() {
    let app = App::new(options(Suite::new([Group::Tame, Group::Wild], [Engine::Index])));
    let mut output = Vec::new();
    let report = app.run(&mut output).unwrap();
    assert!(report.passed());
    assert_eq!(
        std::str::from_utf8(&output).unwrap(),
        "Passed tame string tests\nPassed wildcard tests\nPassed\n"
    );
}

#[test]
fn test_run_no_groups() {
    let app = App::new(options(Suite::new(Vec::<Group>::new(), [Engine::Index])));
    let mut output = Vec::new();
    let report = app.run(&mut output).unwrap();
    assert!(report.passed());
    assert_eq!(std::str::from_utf8(&output).unwrap(), "Passed\n");
}

#[test]
fn test_run_timing() {
    let app = App::new(Options {
        timing: true,
        ..options(Suite::new([Group::Empty], [Engine::Index, Engine::Bytes]))
    });
    let mut output = Vec::new();
    app.run(&mut output).unwrap();
    let output = std::str::from_utf8(&output).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Passed empty string tests");
    assert_eq!(lines[1], "Passed");
    assert!(lines[2].starts_with("index: "));
    assert!(lines[3].starts_with("bytes: "));
}

#[test]
fn test_write_report_failed() {
    let app = App::new(options(Suite::new([Group::Tame], [Engine::Index])));
    let mut output = Vec::new();
    app.write_report(&failing_report(), &mut output).unwrap();
    assert_eq!(
        std::str::from_utf8(&output).unwrap(),
        "Failed tame string tests\nPassed empty string tests\nFailed\n"
    );
}

#[test]
fn test_write_report_verbose() {
    let app = App::new(Options {
        timing: true,
        verbose: true,
        ..options(Suite::new([Group::Tame], [Engine::Index]))
    });
    let mut output = Vec::new();
    app.write_report(&failing_report(), &mut output).unwrap();
    assert_eq!(
        std::str::from_utf8(&output).unwrap(),
        concat!(
            "Failed tame string tests\n",
            "  cursor: pattern \"a?d\" text \"abc\": expected true, got false\n",
            "Passed empty string tests\n",
            "Failed\n",
            "cursor: 3ms\n",
        )
    );
}
