//! End-to-end: settings file + CI pin + a parametrized test module

use std::thread;

use pretty_assertions::assert_eq;
use testspan_config::Pin;
use testspan_core::{MemoryTracer, Outcome, Phase, PhaseReport, TestItem, TestTracer, tags};
use testspan_encode::{Record, Value};
use testspan_test_utils::capture_logs;

fn write_settings(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("testspan.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn ok_reports() -> [PhaseReport; 3] {
    [
        PhaseReport::passed(Phase::Setup),
        PhaseReport::passed(Phase::Call),
        PhaseReport::passed(Phase::Teardown),
    ]
}

#[test]
fn parametrized_module_produces_one_span_per_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_settings(&dir, "env = \"ci\"\n[tags]\nteam = \"infra\"\n");
    let pin = Pin::new()
        .with_tag(tags::GIT_REPOSITORY_URL, "https://github.com/org/repo-name.git")
        .with_tag(tags::GIT_COMMIT_SHA, "abc123");
    let tests = TestTracer::from_settings(MemoryTracer::new(), &path)
        .unwrap()
        .with_pin(pin);

    let expected_params = [
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from(4),
        Value::from(vec![1, 2, 3]),
    ];
    for (i, param) in expected_params.iter().enumerate() {
        let item = TestItem::new("test_parameterize.py::Test1", format!("test_1[item{i}]"))
            .with_argument("item", param.clone());
        let reports = match i {
            3 => vec![
                PhaseReport::passed(Phase::Setup),
                PhaseReport::failed(Phase::Call, "assert 4 in {1, 2, 3}"),
            ],
            4 => vec![PhaseReport::skipped(Phase::Setup, "unconditional skip")],
            _ => ok_reports().to_vec(),
        };
        tests.trace_test(&item, &reports);
    }

    let spans = tests.tracer().pop_spans();
    assert_eq!(spans.len(), 5);
    let statuses: Vec<_> = spans.iter().map(|s| s.tags[tags::STATUS].as_str()).collect();
    assert_eq!(statuses, ["pass", "pass", "pass", "fail", "skip"]);

    let expected_json = [
        serde_json::json!(1),
        serde_json::json!(2),
        serde_json::json!(3),
        serde_json::json!(4),
        serde_json::json!([1, 2, 3]),
    ];
    for (span, expected) in spans.iter().zip(expected_json) {
        let params: serde_json::Value = serde_json::from_str(&span.tags[tags::PARAMETERS]).unwrap();
        assert_eq!(
            params,
            serde_json::json!({"arguments": {"item": expected}, "metadata": {}})
        );
        assert_eq!(span.service.as_deref(), Some("repo-name"));
        assert_eq!(span.tags[tags::ENV], "ci");
        assert_eq!(span.tags["team"], "infra");
        assert_eq!(span.tags[tags::GIT_COMMIT_SHA], "abc123");
    }
}

#[test]
fn unparseable_repository_url_warns_once_and_is_used_verbatim() {
    let url = "https://github.com:organ[ization/repository-name";

    let (tests, logs) = capture_logs(|| {
        TestTracer::new(MemoryTracer::new(), Default::default())
            .with_pin(Pin::new().with_tag(tags::GIT_REPOSITORY_URL, url))
    });
    assert_eq!(logs.warnings().len(), 1);

    tests.trace_test(&TestItem::new("m.py", "test_x"), &ok_reports());
    let spans = tests.tracer().pop_spans();
    assert_eq!(spans[0].service.as_deref(), Some(url));
}

#[test]
fn tests_can_be_traced_from_many_threads() {
    let tests = TestTracer::new(MemoryTracer::new(), Default::default());
    let shared = Record::with_fields("Fixture", [("size", 3)]);

    thread::scope(|scope| {
        for worker in 0..4 {
            let tests = &tests;
            let shared = shared.clone();
            scope.spawn(move || {
                for n in 0..8 {
                    let item = TestItem::new("m.py", format!("test_{worker}_{n}"))
                        .with_argument("fixture", shared.clone())
                        .with_argument("again", shared.clone());
                    let outcome = if n % 2 == 0 { Outcome::Passed } else { Outcome::Skipped };
                    tests.trace_test(&item, &[PhaseReport::new(Phase::Call, outcome)]);
                }
            });
        }
    });

    let spans = tests.tracer().pop_spans();
    assert_eq!(spans.len(), 32);
    for span in &spans {
        assert_eq!(
            span.tags[tags::PARAMETERS],
            r#"{"arguments":{"fixture":{"size":3},"again":{"size":3}},"metadata":{}}"#
        );
    }
    let skipped = spans.iter().filter(|s| s.tags[tags::STATUS] == "skip").count();
    assert_eq!(skipped, 16);
}
